//! Axum route handlers for session lifecycle and form edits.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::form::ResumeForm;
use crate::models::{Notification, PersonalInfoField};
use crate::session::Session;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Notices waiting for `GET .../notifications`.
    pub pending_notifications: usize,
    #[serde(flatten)]
    pub form: ResumeForm,
}

impl SessionView {
    pub async fn of(session: &Session) -> Self {
        Self {
            id: session.id,
            created_at: session.created_at,
            pending_notifications: session.notifications.len(),
            form: session.form.lock().await.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PersonalInfoUpdate {
    pub field: PersonalInfoField,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct PersonalInfoFieldView {
    pub field: PersonalInfoField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SectionContentUpdate {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct JobDescriptionUpdate {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    let session = state.sessions.create().await;
    (StatusCode::CREATED, Json(SessionView::of(&session).await))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(SessionView::of(&session).await))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/sessions/:id/personal-info
pub async fn handle_update_personal_info(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<PersonalInfoUpdate>,
) -> Result<Json<PersonalInfoFieldView>, AppError> {
    let session = state.sessions.get(id).await?;
    let mut form = session.form.lock().await;
    form.set_personal_info_field(update.field, update.value);

    Ok(Json(PersonalInfoFieldView {
        field: update.field,
        value: form.personal_info().get(update.field).to_string(),
    }))
}

/// PUT /api/v1/sessions/:id/sections/:section_id
pub async fn handle_update_section(
    State(state): State<AppState>,
    Path((id, section_id)): Path<(Uuid, String)>,
    Json(update): Json<SectionContentUpdate>,
) -> Result<StatusCode, AppError> {
    let session = state.sessions.get(id).await?;
    if !session
        .form
        .lock()
        .await
        .set_section_content(&section_id, update.content)
    {
        return Err(AppError::NotFound(format!("Section '{section_id}' not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/job-description
pub async fn handle_update_job_description(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<JobDescriptionUpdate>,
) -> Result<StatusCode, AppError> {
    let session = state.sessions.get(id).await?;
    session.form.lock().await.set_job_description(update.text);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/sessions/:id/notifications
///
/// Returns and clears pending notifications, oldest first.
pub async fn handle_drain_notifications(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(session.notifications.drain()))
}
