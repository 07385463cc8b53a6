//! Property CRUD routes.

use crate::handlers::property::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::limit::RequestBodyLimitLayer;

/// Request bodies are drafts, never file uploads; 1 MiB is generous.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

pub fn property_routes(state: AppState) -> Router {
    Router::new()
        .route("/properties", get(list).post(create))
        .route(
            "/properties/:id",
            get(read).patch(update).delete(delete_handler),
        )
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .with_state(state)
}
