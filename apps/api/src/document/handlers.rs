//! Axum route handlers for the stored document and PDF export.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::document::compile::EXPORT_FILENAME;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentBody {
    pub latex: String,
}

/// GET /api/v1/sessions/:id/document
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentBody>, AppError> {
    let session = state.sessions.get(id).await?;
    let latex = session.form.lock().await.document().to_string();
    Ok(Json(DocumentBody { latex }))
}

/// PUT /api/v1/sessions/:id/document
///
/// Stores a hand-edited document. It is kept until the next explicit render.
pub async fn handle_replace_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<DocumentBody>,
) -> Result<StatusCode, AppError> {
    let session = state.sessions.get(id).await?;
    session.form.lock().await.set_document(body.latex);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/document/render
///
/// Regenerates the document from current state, discarding hand edits.
pub async fn handle_render_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentBody>, AppError> {
    let session = state.sessions.get(id).await?;
    let latex = session.form.lock().await.regenerate_document().to_string();
    Ok(Json(DocumentBody { latex }))
}

/// GET /api/v1/sessions/:id/document/pdf
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let session = state.sessions.get(id).await?;
    let latex = session.form.lock().await.document().to_string();

    let pdf = state.compiler.compile(&latex).await?;
    info!("Exported PDF for session {id} ({} bytes)", pdf.len());
    Ok(pdf_response(pdf))
}

/// Wraps PDF bytes as a download.
pub fn pdf_response(pdf: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        Bytes::from(pdf),
    )
        .into_response()
}
