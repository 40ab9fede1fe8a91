pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::estimate::handlers as estimate;
use crate::naming::handlers as naming;
use crate::render::handlers as render;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form support
        .route("/api/v1/options", get(naming::handle_options))
        .route("/api/v1/filenames", post(naming::handle_build_filename))
        .route(
            "/api/v1/size-estimate",
            post(estimate::handle_size_estimate),
        )
        // Stateless export
        .route("/api/v1/reports", post(render::handle_export))
        // Sessions
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            delete(session::handle_discard_session),
        )
        .route(
            "/api/v1/sessions/:id/entries",
            get(session::handle_list_entries).post(session::handle_add_entry),
        )
        .route(
            "/api/v1/sessions/:id/entries/:entry_id",
            get(session::handle_get_entry)
                .patch(session::handle_update_description)
                .delete(session::handle_delete_entry),
        )
        .route(
            "/api/v1/sessions/:id/export",
            post(session::handle_export_session),
        )
        .with_state(state)
}
