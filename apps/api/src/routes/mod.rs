pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/upload_resume", post(handlers::handle_upload_resume))
        .route("/resumes", get(handlers::handle_list_resumes))
        .route(
            "/resume/:id",
            get(handlers::handle_get_resume).delete(handlers::handle_delete_resume),
        )
        .route("/clear_all", delete(handlers::handle_clear_all))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
