//! Integration tests for the `components` repository.

use sqlx::SqlitePool;

use onboard_db::repositories::ComponentRepo;

#[sqlx::test(migrations = "./migrations")]
async fn test_list_returns_seeded_components_in_order(pool: SqlitePool) {
    let components = ComponentRepo::list(&pool).await.unwrap();
    let kinds: Vec<&str> = components.iter().map(|c| c.kind.as_str()).collect();
    assert_eq!(kinds, ["about_me", "address", "birthdate"]);
    assert_eq!(components[0].step, Some(2));
    assert_eq!(components[2].step, Some(3));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_step_moves_component(pool: SqlitePool) {
    let changed = ComponentRepo::update_step(&pool, "birthdate", Some(2))
        .await
        .unwrap();
    assert_eq!(changed, 1);

    let component = ComponentRepo::find_by_kind(&pool, "birthdate")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(component.step, Some(2));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_step_to_null_unplaces_component(pool: SqlitePool) {
    ComponentRepo::update_step(&pool, "address", None)
        .await
        .unwrap();
    let component = ComponentRepo::find_by_kind(&pool, "address")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(component.step, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_step_for_unknown_kind_changes_nothing(pool: SqlitePool) {
    let changed = ComponentRepo::update_step(&pool, "favorite_color", Some(2))
        .await
        .unwrap();
    assert_eq!(changed, 0);
    assert!(ComponentRepo::find_by_kind(&pool, "favorite_color")
        .await
        .unwrap()
        .is_none());
}
