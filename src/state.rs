//! Shared application state for the admin routes.

use crate::gateway::PgPropertyStore;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub store: Arc<PgPropertyStore>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState {
            store: Arc::new(PgPropertyStore::new(pool.clone())),
            pool,
        }
    }
}
