pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::document::handlers as document;
use crate::enhancement::handlers as enhancement;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session + form state
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get_session).delete(session::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/personal-info",
            patch(session::handle_update_personal_info),
        )
        .route(
            "/api/v1/sessions/:id/sections/:section_id",
            put(session::handle_update_section),
        )
        .route(
            "/api/v1/sessions/:id/job-description",
            put(session::handle_update_job_description),
        )
        .route(
            "/api/v1/sessions/:id/notifications",
            get(session::handle_drain_notifications),
        )
        // Enhancement workflow
        .route(
            "/api/v1/sessions/:id/enhance",
            post(enhancement::handle_enhance_all),
        )
        .route(
            "/api/v1/sessions/:id/sections/:section_id/re-enhance",
            post(enhancement::handle_re_enhance),
        )
        .route("/api/v1/sessions/:id/reset", post(enhancement::handle_reset))
        // Document
        .route(
            "/api/v1/sessions/:id/document",
            get(document::handle_get_document).put(document::handle_replace_document),
        )
        .route(
            "/api/v1/sessions/:id/document/render",
            post(document::handle_render_document),
        )
        .route(
            "/api/v1/sessions/:id/document/pdf",
            get(document::handle_export_pdf),
        )
        // One-shot pipeline
        .route(
            "/api/v1/enhance-resume",
            post(enhancement::handle_enhance_resume),
        )
        .with_state(state)
}
