/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Users
 * - `POST /users` - Register a user
 * - `GET /users/{id}` - Get a user
 * - `POST /login` - Exchange email and password for a token
 * - `GET /me` - Current user (requires authentication)
 *
 * ## Posts
 * - `GET /posts` - List posts
 * - `GET /posts/{id}` - Get a post
 * - `POST /posts` - Create a post (requires authentication)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::backend::auth::{get_me, get_user, login, register, TokenAuthority};
use crate::backend::middleware::auth_middleware;
use crate::backend::posts::{create_post, get_post, list_posts};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Protected handlers get `auth_middleware` as a route layer on their own
/// method router, so `GET /posts` stays public while `POST /posts` does not.
pub fn configure_api_routes(
    router: Router<AppState>,
    tokens: Arc<TokenAuthority>,
) -> Router<AppState> {
    let auth = from_fn_with_state(tokens, auth_middleware);

    router
        // User endpoints
        .route("/users", post(register))
        .route("/users/{id}", get(get_user))
        .route("/login", post(login))
        .route("/me", get(get_me).route_layer(auth.clone()))
        // Post endpoints
        .route(
            "/posts",
            get(list_posts).merge(post(create_post).route_layer(auth)),
        )
        .route("/posts/{id}", get(get_post))
}
