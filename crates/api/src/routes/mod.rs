pub mod components;
pub mod data;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /data                      whole-database dump (GET)
///
/// /components                list (GET)
/// /components/{kind}         move to step (PATCH)
///
/// /users                     create blank profile (POST)
/// /users/{id}                get (GET), partial update (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/data", data::router())
        .nest("/components", components::router())
        .nest("/users", users::router())
}
