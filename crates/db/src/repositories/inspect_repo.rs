//! Whole-database inspection for the debug dump endpoint.

use std::collections::BTreeMap;

use crate::json_rows::row_to_json;
use crate::models::inspect::TableDump;
use crate::DbPool;

/// Reads table metadata and contents without knowing the schema up front.
pub struct InspectRepo;

impl InspectRepo {
    /// Names of all application tables, excluding SQLite internals and the
    /// migration bookkeeping table.
    pub async fn list_tables(pool: &DbPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' \
               AND name NOT LIKE 'sqlite_%' \
               AND name <> '_sqlx_migrations' \
             ORDER BY name",
        )
        .fetch_all(pool)
        .await
    }

    /// Column names of `table` in declaration order.
    pub async fn table_columns(pool: &DbPool, table: &str) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT name FROM pragma_table_info(?) ORDER BY cid")
            .bind(table)
            .fetch_all(pool)
            .await
    }

    /// Every row of `table`, decoded dynamically.
    pub async fn table_rows(
        pool: &DbPool,
        table: &str,
    ) -> Result<Vec<serde_json::Map<String, serde_json::Value>>, sqlx::Error> {
        let query = format!("SELECT * FROM {}", quote_identifier(table));
        let rows = sqlx::query(&query).fetch_all(pool).await?;
        rows.iter().map(row_to_json).collect()
    }

    /// Rows and columns of every application table, keyed by table name.
    pub async fn dump(pool: &DbPool) -> Result<BTreeMap<String, TableDump>, sqlx::Error> {
        let mut tables = BTreeMap::new();
        for table in Self::list_tables(pool).await? {
            let dump = TableDump {
                rows: Self::table_rows(pool, &table).await?,
                columns: Self::table_columns(pool, &table).await?,
            };
            tables.insert(table, dump);
        }
        tracing::debug!(table_count = tables.len(), "Database dumped");
        Ok(tables)
    }
}

/// Quote an identifier for interpolation into SQL.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_identifier("users"), "\"users\"");
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }
}
