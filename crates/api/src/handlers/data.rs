//! Debug endpoint that dumps every application table as JSON.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;

use onboard_db::models::inspect::TableDump;
use onboard_db::repositories::InspectRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /data -- `{table: {rows, columns}}` for every table.
pub async fn dump_database(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, TableDump>>> {
    let tables = InspectRepo::dump(&state.pool).await?;
    Ok(Json(tables))
}
