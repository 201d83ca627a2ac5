use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

/// A user-facing toast: title, message and severity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(title: &str, message: &str, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            severity,
            created_at: Utc::now(),
        }
    }

    pub fn success(title: &str, message: &str) -> Self {
        Self::new(title, message, Severity::Success)
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self::new(title, message, Severity::Error)
    }
}
