use axum::routing::get;
use axum::Router;

use crate::handlers::data;
use crate::state::AppState;

/// Debug dump route -- mounted at `/data`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(data::dump_database))
}
