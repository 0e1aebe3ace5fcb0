//! Route definitions for user profiles.
//!
//! Mounted at `/users` by `api_routes()`.
//!
//! ```text
//! POST   /                create_user
//! GET    /{id}            get_user
//! PATCH  /{id}            update_user
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User profile routes -- mounted at `/users`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create_user))
        .route("/{id}", get(users::get_user).patch(users::update_user))
}
