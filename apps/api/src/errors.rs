use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::document::CompileError;
use crate::enhancement::EnhancementFailure;
use crate::form::Rejection;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("Enhancement error: {0}")]
    Enhancement(#[from] EnhancementFailure),

    #[error("LaTeX compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Rejected(rejection) => {
                let code = match rejection {
                    Rejection::NoContent => "NO_CONTENT",
                    Rejection::AlreadyEnhancing => "ALREADY_ENHANCING",
                    Rejection::AlreadyEnhanced => "ALREADY_ENHANCED",
                    Rejection::NotEnhanced => "NOT_ENHANCED",
                    Rejection::SectionBusy(_) => "SECTION_BUSY",
                    Rejection::ReEnhancePending => "RE_ENHANCE_PENDING",
                };
                (StatusCode::CONFLICT, code, rejection.to_string())
            }
            AppError::Enhancement(e) => {
                tracing::error!("Enhancement error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ENHANCEMENT_FAILED",
                    "Enhancement failed. Please try again later.".to_string(),
                )
            }
            AppError::Compile(CompileError::Failed { output, .. }) => {
                tracing::warn!("LaTeX compilation failed: {output}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "LATEX_COMPILE_FAILED",
                    "The LaTeX document could not be compiled".to_string(),
                )
            }
            AppError::Compile(e) => {
                tracing::error!("LaTeX toolchain error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LATEX_UNAVAILABLE",
                    "PDF export is unavailable".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
