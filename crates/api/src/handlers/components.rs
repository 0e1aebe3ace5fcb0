//! Handlers for wizard components.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use onboard_db::models::component::{Component, UpdateComponentStep};
use onboard_db::repositories::ComponentRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /components -- every component with its current step.
pub async fn list_components(State(state): State<AppState>) -> AppResult<Json<Vec<Component>>> {
    let components = ComponentRepo::list(&state.pool).await?;
    Ok(Json(components))
}

/// PATCH /components/{kind} -- move a component to another step.
///
/// An unknown kind changes nothing and still returns 204.
pub async fn update_component_step(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(body): Json<UpdateComponentStep>,
) -> AppResult<StatusCode> {
    let changed = ComponentRepo::update_step(&state.pool, &kind, body.step).await?;

    if changed == 0 {
        tracing::warn!(kind = %kind, "Step update for unknown component ignored");
    } else {
        tracing::info!(kind = %kind, step = ?body.step, "Component step updated");
    }

    Ok(StatusCode::NO_CONTENT)
}
