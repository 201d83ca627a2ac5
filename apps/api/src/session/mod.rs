//! In-memory session registry. A session is one user's form plus the
//! notifications waiting to be shown; nothing outlives the process.
//!
//! Clients that go away without deleting their session are swept once the
//! session has been idle for the configured TTL.

pub mod handlers;

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::form::ResumeForm;
use crate::notifications::NotificationLog;

pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub form: Mutex<ResumeForm>,
    pub notifications: NotificationLog,
    last_access: StdMutex<DateTime<Utc>>,
}

impl Session {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            form: Mutex::new(ResumeForm::new()),
            notifications: NotificationLog::new(),
            last_access: StdMutex::new(now),
        }
    }

    pub fn last_access(&self) -> DateTime<Utc> {
        *self.last_access.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn touch(&self) {
        *self.last_access.lock().unwrap_or_else(PoisonError::into_inner) = Utc::now();
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Arc<Session> {
        let session = Arc::new(Session::new());
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        info!("Created session {}", session.id);
        session
    }

    /// Looks up a session and marks it as recently used.
    pub async fn get(&self, id: Uuid) -> Result<Arc<Session>, AppError> {
        let session = self
            .sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        session.touch();
        Ok(session)
    }

    /// Removes a session. In-flight passes keep their own handle and finish
    /// against the detached form.
    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| info!("Removed session {id}"))
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every session last used before `cutoff`. Returns how many went.
    pub async fn evict_idle_since(&self, cutoff: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|id, session| {
            let keep = session.last_access() >= cutoff;
            if !keep {
                debug!("Evicting idle session {id}");
            }
            keep
        });
        before - sessions.len()
    }

    /// Sweeps sessions idle for longer than `ttl`, every `every`.
    pub fn spawn_sweeper(&self, ttl: Duration, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let cutoff = match chrono::Duration::from_std(ttl) {
                    Ok(ttl) => Utc::now() - ttl,
                    Err(_) => continue,
                };
                let evicted = store.evict_idle_since(cutoff).await;
                if evicted > 0 {
                    info!("Evicted {evicted} idle sessions");
                }
            }
        })
    }
}
