//! Enhancement workflow. Drives a session's form through a pass.
//!
//! Flow: lock → guarded begin (rejections return here, nothing changed) →
//!       unlock → call the service → lock → apply all results or abort.
//!
//! The form lock is never held across a service call. A second `enhance_all`
//! during the wait sees `Enhancing` and is rejected instead of queueing.

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::enhancement::service::{EnhancementFailure, EnhancementPass, EnhancementService};
use crate::form::{Rejection, ResumeForm};
use crate::models::{Notification, Section};
use crate::notifications::NotificationSink;

const ENHANCE_ALL_DONE: (&str, &str) = (
    "Enhancement Complete",
    "All sections have been improved by AI.",
);
const RE_ENHANCE_DONE: (&str, &str) = (
    "Section Re-enhanced",
    "New suggestions have been generated.",
);
const ENHANCE_FAILED: (&str, &str) = ("Enhancement Failed", "Please try again later.");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhanceOutcome {
    /// New text was written.
    Applied,
    /// The service failed; state is exactly as before the call.
    Failed,
    /// No section has that id; nothing happened.
    UnknownSection,
}

/// Enhances every section together. Either all sections get new text or none do.
pub async fn enhance_all(
    form: &Mutex<ResumeForm>,
    service: &dyn EnhancementService,
    sink: &dyn NotificationSink,
) -> Result<EnhanceOutcome, Rejection> {
    let (sections, job_description) = {
        let mut form = form.lock().await;
        let sections = form.begin_enhance_all()?;
        (sections, form.job_description().to_string())
    };
    info!("Enhancing {} sections", sections.len());

    match enhance_each(&sections, &job_description, service).await {
        Ok(results) => {
            form.lock().await.complete_enhance_all(results);
            sink.notify(Notification::success(ENHANCE_ALL_DONE.0, ENHANCE_ALL_DONE.1));
            Ok(EnhanceOutcome::Applied)
        }
        Err(e) => {
            warn!("Enhance-all failed, no sections changed: {e}");
            form.lock().await.abort_enhance_all();
            sink.notify(Notification::error(ENHANCE_FAILED.0, ENHANCE_FAILED.1));
            Ok(EnhanceOutcome::Failed)
        }
    }
}

/// Redoes one section. Siblings and the session status are never touched.
pub async fn re_enhance(
    form: &Mutex<ResumeForm>,
    section_id: &str,
    service: &dyn EnhancementService,
    sink: &dyn NotificationSink,
) -> Result<EnhanceOutcome, Rejection> {
    let (section, job_description) = {
        let mut form = form.lock().await;
        let Some(section) = form.begin_re_enhance(section_id)? else {
            return Ok(EnhanceOutcome::UnknownSection);
        };
        (section, form.job_description().to_string())
    };

    match service
        .enhance_section(&section, &job_description, EnhancementPass::Redo)
        .await
    {
        Ok(text) => {
            form.lock().await.complete_re_enhance(section_id, text);
            sink.notify(Notification::success(RE_ENHANCE_DONE.0, RE_ENHANCE_DONE.1));
            Ok(EnhanceOutcome::Applied)
        }
        Err(e) => {
            warn!("Re-enhancing section '{section_id}' failed: {e}");
            form.lock().await.abort_re_enhance(section_id);
            sink.notify(Notification::error(ENHANCE_FAILED.0, ENHANCE_FAILED.1));
            Ok(EnhanceOutcome::Failed)
        }
    }
}

/// Runs one all-sections pass through the service, in list order.
pub async fn enhance_each(
    sections: &[Section],
    job_description: &str,
    service: &dyn EnhancementService,
) -> Result<Vec<(String, String)>, EnhancementFailure> {
    let results = service.enhance_sections(sections, job_description).await?;
    debug!("Service returned {} enhanced sections", results.len());
    Ok(results)
}
