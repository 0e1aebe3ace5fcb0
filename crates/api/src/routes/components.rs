//! Route definitions for wizard components.
//!
//! Mounted at `/components` by `api_routes()`.
//!
//! ```text
//! GET    /                list_components
//! PATCH  /{kind}          update_component_step
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::components;
use crate::state::AppState;

/// Component routes -- mounted at `/components`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(components::list_components))
        .route("/{kind}", patch(components::update_component_step))
}
