//! Integration tests for the repository layer against a real database.
//!
//! Requires a PostgreSQL `DATABASE_URL`; run with `cargo test -- --ignored`.
//! Covers the permissive values the validation layer lets through and what
//! the store does with them:
//! - Empty / unicode strings are persisted unchanged
//! - Dangling `parent_id`, `learner_id`, `item_id` hit foreign keys
//! - Partial updates and cascade deletes

use learnhub_core::entities::{InteractionLogCreate, ItemCreate, ItemUpdate, LearnerCreate};
use learnhub_db::repositories::{InteractionLogRepo, ItemRepo, LearnerRepo};
use sqlx::PgPool;

const FK_VIOLATION: &str = "23503";

fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn item_hierarchy_round_trip(pool: PgPool) {
    let root = ItemRepo::create(&pool, &ItemCreate::new("Course"))
        .await
        .unwrap();
    assert_eq!(root.parent_id, None);
    assert_eq!(root.description, "");

    let child = ItemRepo::create(
        &pool,
        &ItemCreate::new("Тест 测试 テスト 🔧")
            .with_parent_id(root.id)
            .with_description("B".repeat(5000)),
    )
    .await
    .unwrap();
    assert_eq!(child.parent_id, Some(root.id));
    assert_eq!(child.title, "Тест 测试 テスト 🔧");
    assert_eq!(child.description.len(), 5000);

    let children = ItemRepo::list_children(&pool, root.id).await.unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].id, child.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn item_with_dangling_parent_is_rejected_by_store(pool: PgPool) {
    for parent_id in [0, -1] {
        let err = ItemRepo::create(&pool, &ItemCreate::new("Child").with_parent_id(parent_id))
            .await
            .unwrap_err();
        assert_eq!(sqlstate(&err).as_deref(), Some(FK_VIOLATION));
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn item_update_applies_only_present_fields(pool: PgPool) {
    let item = ItemRepo::create(&pool, &ItemCreate::new("Old").with_description("keep"))
        .await
        .unwrap();

    let updated = ItemRepo::update(&pool, item.id, &ItemUpdate::new().with_title(""))
        .await
        .unwrap()
        .expect("item exists");
    assert_eq!(updated.title, "");
    assert_eq!(updated.description, "keep");

    let missing = ItemRepo::update(&pool, item.id + 1000, &ItemUpdate::new())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn deleting_item_cascades_to_children(pool: PgPool) {
    let root = ItemRepo::create(&pool, &ItemCreate::new("Root")).await.unwrap();
    let child = ItemRepo::create(&pool, &ItemCreate::new("Leaf").with_parent_id(root.id))
        .await
        .unwrap();

    assert!(ItemRepo::delete(&pool, root.id).await.unwrap());
    assert!(ItemRepo::find_by_id(&pool, child.id).await.unwrap().is_none());
    assert!(!ItemRepo::delete(&pool, root.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Learners and interactions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn learner_with_empty_fields_is_persisted(pool: PgPool) {
    let learner = LearnerRepo::create(&pool, &LearnerCreate::new("", ""))
        .await
        .unwrap();
    assert_eq!(learner.name, "");
    assert_eq!(learner.email, "");

    let listed = LearnerRepo::list(&pool, None, None).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn interaction_logs_are_listed_per_learner_and_item(pool: PgPool) {
    let learner = LearnerRepo::create(&pool, &LearnerCreate::new("Ivan", "invalid-email"))
        .await
        .unwrap();
    let item = ItemRepo::create(&pool, &ItemCreate::new("Lesson")).await.unwrap();

    for kind in ["view", "attempt<1>", ""] {
        InteractionLogRepo::create(&pool, &InteractionLogCreate::new(learner.id, item.id, kind))
            .await
            .unwrap();
    }

    let by_learner = InteractionLogRepo::list_for_learner(&pool, learner.id, None, None)
        .await
        .unwrap();
    let by_item = InteractionLogRepo::list_for_item(&pool, item.id, Some(2), None)
        .await
        .unwrap();
    assert_eq!(by_learner.len(), 3);
    assert_eq!(by_item.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn interaction_with_unknown_ids_is_rejected_by_store(pool: PgPool) {
    let err = InteractionLogRepo::create(&pool, &InteractionLogCreate::new(-1, -1, ""))
        .await
        .unwrap_err();
    assert_eq!(sqlstate(&err).as_deref(), Some(FK_VIOLATION));
}
