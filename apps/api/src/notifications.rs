use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, warn};

use crate::models::{Notification, Severity};

/// Receives user-facing success/failure notices.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Buffers notifications until the client drains them, logging each one.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    pending: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *pending)
    }

    pub fn len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => info!("{}: {}", notification.title, notification.message),
            Severity::Error => warn!("{}: {}", notification.title, notification.message),
        }
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
