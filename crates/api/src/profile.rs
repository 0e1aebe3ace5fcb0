//! User profile operations shared by the `/users` handlers.
//!
//! [`apply_partial_update`] is the entry point for "change some fields of
//! user X": it filters and validates the whole request up front, then
//! writes one column at a time.

use serde_json::{Map, Value};

use onboard_core::error::CoreError;
use onboard_core::types::DbId;
use onboard_core::user_profile::plan_partial_update;
use onboard_db::models::user::User;
use onboard_db::repositories::user_repo::ColumnUpdate;
use onboard_db::repositories::{UpdateAtomicity, UserRepo};
use onboard_db::DbPool;

use crate::error::AppResult;

/// Insert an empty profile and return its id.
pub async fn create_blank(pool: &DbPool) -> AppResult<DbId> {
    let id = UserRepo::create_blank(pool).await?;
    tracing::info!(user_id = id, "User created");
    Ok(id)
}

/// Load and re-validate a profile.
pub async fn get(pool: &DbPool, id: DbId) -> AppResult<User> {
    let row = UserRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;
    Ok(User::try_from(row)?)
}

/// Change the supplied fields of user `id`, leaving the rest untouched.
///
/// Unknown keys are ignored. If no known key remains the call fails with
/// [`CoreError::NoUpdatableFields`] before touching storage. Every value is
/// validated before the first write. The user's existence is not checked;
/// updating a missing id writes nothing and still succeeds.
pub async fn apply_partial_update(
    pool: &DbPool,
    id: DbId,
    proposed: &Map<String, Value>,
    atomicity: UpdateAtomicity,
) -> AppResult<()> {
    let plan = plan_partial_update(proposed)?;

    let updates = plan
        .into_iter()
        .map(|(field, value)| value.to_column().map(|column| (field, column)))
        .collect::<Result<Vec<ColumnUpdate>, CoreError>>()?;

    UserRepo::apply_updates(pool, id, &updates, atomicity).await?;

    tracing::info!(
        user_id = id,
        fields = ?updates.iter().map(|(f, _)| f.as_str()).collect::<Vec<_>>(),
        atomicity = atomicity.as_str(),
        "User profile updated"
    );
    Ok(())
}
