/**
 * Server Initialization
 *
 * 1. Connect to the database if one is configured
 * 2. Build `AppState` from the configuration
 * 3. Create the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// A missing or unreachable database does not stop the server; routes that
/// need it answer 503 until it is configured.
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing Postboard backend server");

    let db_pool = match config.database_url.as_deref() {
        Some(url) => load_database(url).await,
        None => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            None
        }
    };

    let app_state = AppState::new(config, db_pool);
    tracing::info!(
        "Auth configured: bcrypt cost {}, token lifetime {}s",
        app_state.hasher.cost(),
        app_state.tokens.ttl().num_seconds()
    );

    create_router(app_state)
}
