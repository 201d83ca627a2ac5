//! Axum route handlers for the enhancement workflow.
//!
//! Passes run on their own task: a client that disconnects mid-pass cannot
//! cancel it halfway and strand the session in `Enhancing`.

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::document::handlers::pdf_response;
use crate::document::render_document;
use crate::enhancement::orchestrator::{enhance_all, enhance_each, re_enhance, EnhanceOutcome};
use crate::errors::AppError;
use crate::models::{PersonalInfo, Section};
use crate::session::handlers::SessionView;
use crate::session::Session;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub outcome: EnhanceOutcome,
    pub applied: bool,
    pub session: SessionView,
}

/// One-shot request: raw sections in, compiled PDF out.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResumeRequest {
    #[serde(default, alias = "job_description")]
    pub job_description: String,
    #[serde(default, alias = "personal_info")]
    pub personal_info: PersonalInfo,
    pub sections: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/enhance
///
/// Enhances every section. 409 if the pass is not allowed right now; a
/// service failure returns 200 with `applied: false` and queues a notification.
pub async fn handle_enhance_all(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let session = state.sessions.get(id).await?;

    let task = {
        let session = session.clone();
        let enhancer = state.enhancer.clone();
        tokio::spawn(async move {
            enhance_all(&session.form, enhancer.as_ref(), &session.notifications).await
        })
    };

    let outcome = match task.await {
        Ok(result) => result?,
        Err(e) => {
            error!("Enhance-all task for session {id} aborted: {e}");
            session.form.lock().await.abort_enhance_all();
            return Err(AppError::Internal(anyhow::anyhow!("enhancement task aborted")));
        }
    };
    info!("Enhance-all for session {id}: {outcome:?}");

    respond(outcome, &session).await
}

/// POST /api/v1/sessions/:id/sections/:section_id/re-enhance
pub async fn handle_re_enhance(
    State(state): State<AppState>,
    Path((id, section_id)): Path<(Uuid, String)>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let session = state.sessions.get(id).await?;

    let task = {
        let session = session.clone();
        let enhancer = state.enhancer.clone();
        let section_id = section_id.clone();
        tokio::spawn(async move {
            re_enhance(
                &session.form,
                &section_id,
                enhancer.as_ref(),
                &session.notifications,
            )
            .await
        })
    };

    let outcome = match task.await {
        Ok(result) => result?,
        Err(e) => {
            error!("Re-enhance task for session {id} aborted: {e}");
            session.form.lock().await.abort_re_enhance(&section_id);
            return Err(AppError::Internal(anyhow::anyhow!("enhancement task aborted")));
        }
    };

    if outcome == EnhanceOutcome::UnknownSection {
        return Err(AppError::NotFound(format!("Section '{section_id}' not found")));
    }
    respond(outcome, &session).await
}

/// POST /api/v1/sessions/:id/reset
///
/// Clears enhanced text so a fresh all-sections pass can run.
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(id).await?;
    session.form.lock().await.reset_enhancements()?;
    Ok(Json(SessionView::of(&session).await))
}

/// POST /api/v1/enhance-resume
///
/// Stateless pipeline: enhance each raw section → render → compile → PDF.
pub async fn handle_enhance_resume(
    State(state): State<AppState>,
    Json(request): Json<EnhanceResumeRequest>,
) -> Result<Response, AppError> {
    if request.sections.iter().all(|s| s.is_empty()) {
        return Err(AppError::Validation(
            "At least one section must have content".to_string(),
        ));
    }

    let sections = raw_sections(request.sections);
    let results = enhance_each(&sections, &request.job_description, state.enhancer.as_ref()).await?;

    let enhanced: Vec<Section> = sections
        .into_iter()
        .zip(results)
        .map(|(section, (_, text))| Section {
            enhanced: text,
            ..section
        })
        .collect();

    let latex = render_document(&request.personal_info, &enhanced);
    let pdf = state.compiler.compile(&latex).await?;
    info!("One-shot resume compiled ({} bytes)", pdf.len());
    Ok(pdf_response(pdf))
}

fn raw_sections(contents: Vec<String>) -> Vec<Section> {
    contents
        .into_iter()
        .enumerate()
        .map(|(i, content)| Section {
            id: format!("section-{}", i + 1),
            title: format!("Section {}", i + 1),
            content,
            enhanced: String::new(),
        })
        .collect()
}

async fn respond(
    outcome: EnhanceOutcome,
    session: &Session,
) -> Result<Json<EnhanceResponse>, AppError> {
    Ok(Json(EnhanceResponse {
        outcome,
        applied: outcome == EnhanceOutcome::Applied,
        session: SessionView::of(session).await,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_sections_get_stable_ids() {
        let sections = raw_sections(vec!["a".to_string(), String::new()]);
        assert_eq!(sections[0].id, "section-1");
        assert_eq!(sections[1].title, "Section 2");
        assert_eq!(sections[0].content, "a");
    }

    #[test]
    fn test_enhance_resume_request_accepts_frontend_shape() {
        let json = serde_json::json!({
            "jobDescription": "Rust engineer",
            "personalInfo": {"fullName": "Jane Doe"},
            "sections": ["Built things"]
        });
        let request: EnhanceResumeRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.job_description, "Rust engineer");
        assert_eq!(request.personal_info.full_name, "Jane Doe");
        assert_eq!(request.sections.len(), 1);
    }
}
