/// Request and response types
pub mod types;

/// POST /users
pub mod signup;

/// POST /login
pub mod login;

/// GET /users/{id}
pub mod user;

/// GET /me
pub mod me;

pub use types::{CreateUserRequest, LoginRequest, LoginResponse, UserResponse};

pub use signup::register;
pub use login::login;
pub use user::get_user;
pub use me::get_me;

use crate::backend::error::BackendError;

/// Run CPU-heavy work (bcrypt) on the blocking pool
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T, BackendError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| BackendError::state(format!("blocking task failed: {}", e)))
}
