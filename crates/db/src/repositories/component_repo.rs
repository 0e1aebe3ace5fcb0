//! Repository for the `components` table.

use crate::models::component::Component;
use crate::DbPool;

/// Column list for `components` queries.
const COLUMNS: &str = "kind, step, label, sort_order";

/// Provides read and step-update operations for wizard components.
pub struct ComponentRepo;

impl ComponentRepo {
    /// List every component in display order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Component>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM components ORDER BY sort_order, kind");
        sqlx::query_as::<_, Component>(&query).fetch_all(pool).await
    }

    /// Find a component by kind.
    pub async fn find_by_kind(pool: &DbPool, kind: &str) -> Result<Option<Component>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM components WHERE kind = ?");
        sqlx::query_as::<_, Component>(&query)
            .bind(kind)
            .fetch_optional(pool)
            .await
    }

    /// Move a component to `step`. Returns the number of rows changed, which
    /// is zero for an unknown kind.
    pub async fn update_step(
        pool: &DbPool,
        kind: &str,
        step: Option<i64>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE components SET step = ? WHERE kind = ?")
            .bind(step)
            .bind(kind)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
