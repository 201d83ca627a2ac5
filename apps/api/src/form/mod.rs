// Form state manager: the in-memory model a session edits, plus the
// guarded workflow transitions the enhancement orchestrator drives.

pub mod state;
pub mod workflow;

pub use state::ResumeForm;
pub use workflow::{Rejection, WorkflowStatus};
