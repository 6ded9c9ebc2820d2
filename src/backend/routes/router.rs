/**
 * Main Router Configuration
 *
 * Assembles the service routes, the API routes, CORS and request tracing,
 * and a JSON 404 fallback.
 */

use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the main application router
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/", get(home))
        .route("/test-db", get(test_db));

    let router = configure_api_routes(router, app_state.tokens.clone());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .fallback(|| async { BackendError::not_found("Not Found") })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn home() -> &'static str {
    "Backend is working!"
}

/// Round-trip to the database
async fn test_db(
    State(pool): State<Option<PgPool>>,
) -> Result<Json<serde_json::Value>, BackendError> {
    let pool = pool.ok_or_else(BackendError::database_unavailable)?;

    let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()")
        .fetch_one(&pool)
        .await?;

    Ok(Json(serde_json::json!({ "now": now })))
}
