//! Handlers for user profiles.
//!
//! Profiles start as empty shells and are filled in one wizard step at a
//! time through partial updates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

use onboard_core::types::DbId;
use onboard_db::models::user::User;

use crate::error::AppResult;
use crate::profile;
use crate::state::AppState;

/// Response body for a newly created user.
#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub id: DbId,
}

// ---------------------------------------------------------------------------
// POST /users
// ---------------------------------------------------------------------------

/// Create an empty profile and return its id.
pub async fn create_user(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let id = profile::create_blank(&state.pool).await?;
    Ok((StatusCode::CREATED, Json(CreatedUser { id })))
}

// ---------------------------------------------------------------------------
// GET /users/{id}
// ---------------------------------------------------------------------------

/// Get a single profile by ID.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = profile::get(&state.pool, id).await?;
    Ok(Json(user))
}

// ---------------------------------------------------------------------------
// PATCH /users/{id}
// ---------------------------------------------------------------------------

/// Update the supplied fields of a profile.
///
/// The body is a `{field: value}` object; unknown keys are ignored.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Map<String, Value>>,
) -> AppResult<StatusCode> {
    profile::apply_partial_update(&state.pool, id, &body, state.config.update_atomicity).await?;
    Ok(StatusCode::NO_CONTENT)
}
