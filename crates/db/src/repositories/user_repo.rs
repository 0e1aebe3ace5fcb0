//! Repository for the `users` table.

use std::str::FromStr;
use std::sync::LazyLock;

use sqlx::{Executor, Sqlite};

use onboard_core::types::DbId;
use onboard_core::user_profile::{fields, UserField};

use crate::models::user::UserRow;
use crate::DbPool;

/// Column list for `users` queries, derived from the field declaration.
static COLUMNS: LazyLock<String> = LazyLock::new(|| {
    std::iter::once("id")
        .chain(fields())
        .collect::<Vec<_>>()
        .join(", ")
});

/// Transaction granularity of a multi-field update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateAtomicity {
    /// Each field update commits on its own. Concurrent updates to the same
    /// user interleave per field.
    #[default]
    PerField,
    /// All field updates of one request commit together.
    PerRequest,
}

impl UpdateAtomicity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PerField => "per_field",
            Self::PerRequest => "per_request",
        }
    }
}

impl FromStr for UpdateAtomicity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per_field" => Ok(Self::PerField),
            "per_request" => Ok(Self::PerRequest),
            other => Err(format!(
                "Invalid update atomicity '{other}'. Must be one of: per_field, per_request"
            )),
        }
    }
}

/// A single column write: the field and its stored text (`None` for NULL).
pub type ColumnUpdate = (UserField, Option<String>);

/// Provides create, read, and point-update operations for user profiles.
pub struct UserRepo;

impl UserRepo {
    /// Insert an empty profile and return its generated id.
    pub async fn create_blank(pool: &DbPool) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users DEFAULT VALUES")
            .execute(pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Find a user row by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<UserRow>, sqlx::Error> {
        let query = format!("SELECT {} FROM users WHERE id = ?", *COLUMNS);
        sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set one column of one user. Returns the number of rows changed, which
    /// is zero when the user does not exist.
    ///
    /// Generic over the executor so callers can run it on the pool or inside
    /// a transaction.
    pub async fn update_field<'e, E>(
        executor: E,
        id: DbId,
        field: UserField,
        value: Option<&str>,
    ) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        // `field` comes from a closed enum, so interpolating its name is safe.
        let query = format!("UPDATE users SET {field} = ? WHERE id = ?");
        let result = sqlx::query(&query)
            .bind(value)
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Apply a batch of column writes as independent point updates.
    ///
    /// With [`UpdateAtomicity::PerRequest`] the writes share one transaction;
    /// otherwise each commits as soon as it runs and earlier writes survive a
    /// later failure.
    pub async fn apply_updates(
        pool: &DbPool,
        id: DbId,
        updates: &[ColumnUpdate],
        atomicity: UpdateAtomicity,
    ) -> Result<(), sqlx::Error> {
        match atomicity {
            UpdateAtomicity::PerField => {
                for (field, value) in updates {
                    Self::update_field(pool, id, *field, value.as_deref()).await?;
                }
            }
            UpdateAtomicity::PerRequest => {
                let mut tx = pool.begin().await?;
                for (field, value) in updates {
                    Self::update_field(&mut *tx, id, *field, value.as_deref()).await?;
                }
                tx.commit().await?;
            }
        }
        Ok(())
    }
}
