//! Schema bootstrap tests: first startup creates the database file and the
//! fixed schema, later startups leave existing data alone.

use sqlx::SqlitePool;

use onboard_db::repositories::{ComponentRepo, UserRepo};

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: SqlitePool) {
    onboard_db::health_check(&pool).await.unwrap();

    for table in ["users", "components"] {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap_or_else(|e| panic!("{table} lookup failed: {e}"));
        assert_eq!(count.0, 1, "{table} should exist");
    }

    let components = ComponentRepo::list(&pool).await.unwrap();
    assert_eq!(components.len(), 3, "seeded wizard components");
}

#[tokio::test]
async fn test_first_startup_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.sqlite3");
    assert!(!path.exists());

    let url = format!("sqlite://{}", path.display());
    let pool = onboard_db::create_pool(&url).await.unwrap();
    onboard_db::run_migrations(&pool).await.unwrap();
    assert!(path.exists());

    let id = UserRepo::create_blank(&pool).await.unwrap();
    pool.close().await;

    // Second startup against the same file: schema is not re-applied and
    // existing rows survive.
    let pool = onboard_db::create_pool(&url).await.unwrap();
    onboard_db::run_migrations(&pool).await.unwrap();
    assert!(UserRepo::find_by_id(&pool, id).await.unwrap().is_some());
    assert_eq!(ComponentRepo::list(&pool).await.unwrap().len(), 3);
}
