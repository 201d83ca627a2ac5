use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session-wide enhancement status.
///
/// `Idle -> Enhancing -> Enhanced`. A failed pass drops back to `Idle`.
/// Single-section redo passes are tracked separately and never move this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    #[default]
    Idle,
    Enhancing,
    Enhanced,
}

/// Synchronous refusal of a workflow action. Nothing changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("every section is empty; add content before enhancing")]
    NoContent,

    #[error("an enhancement pass is already running")]
    AlreadyEnhancing,

    #[error("sections are already enhanced; reset before enhancing again")]
    AlreadyEnhanced,

    #[error("sections must be enhanced before a single section can be redone")]
    NotEnhanced,

    #[error("section '{0}' is already being re-enhanced")]
    SectionBusy(String),

    #[error("a re-enhancement is still running")]
    ReEnhancePending,
}
