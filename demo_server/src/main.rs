//! Demo admin backend: bootstraps the properties table and mounts the common
//! and property routes.
//!
//! Run from repo root: `cargo run -p demo-server`

use axum::Router;
use roomsaathi_core::{
    common_routes_with_ready, ensure_database_exists, ensure_property_tables, property_routes,
    AppState,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("roomsaathi_core=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/roomsaathi".into());
    ensure_database_exists(&database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    ensure_property_tables(&pool).await?;
    let state = AppState::new(pool);

    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest("/api/v1", property_routes(state));

    let listener = TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
