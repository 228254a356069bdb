mod common;

use common::{article, open_engine};
use readquest::EngineError;

#[tokio::test]
async fn lookup_returns_the_stored_item_or_none() {
    let (_dir, engine) = open_engine().await;

    engine.catalog().insert(article("a1", 5, 15)).await.unwrap();

    let item = engine.catalog().get("a1").await.unwrap().unwrap();
    assert_eq!(item.title, "Article a1");
    assert_eq!(item.target_seconds(), 300);

    assert!(engine.catalog().get("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn authoring_validation_rejects_non_positive_fields() {
    let (_dir, engine) = open_engine().await;

    let err = engine.catalog().insert(article("a1", 0, 15)).await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Validation { field: "estimated_minutes", .. }
    ));

    let err = engine.catalog().insert(article("a1", 5, 0)).await.unwrap_err();
    assert!(matches!(err, EngineError::Validation { field: "reward_xp", .. }));

    let mut blank_title = article("a1", 5, 15);
    blank_title.title = "  ".to_string();
    let err = engine.catalog().insert(blank_title).await.unwrap_err();
    assert!(matches!(err, EngineError::Validation { field: "title", .. }));

    assert!(engine.catalog().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn catalog_stream_reflects_inserts_and_deletes() {
    let (_dir, engine) = open_engine().await;

    let rx = engine.catalog().watch();
    assert!(rx.borrow().is_empty());

    engine.catalog().insert(article("a1", 5, 15)).await.unwrap();
    assert_eq!(rx.borrow().len(), 1);

    assert!(engine.catalog().delete("a1").await.unwrap());
    assert!(rx.borrow().is_empty());
    assert!(!engine.catalog().delete("a1").await.unwrap());
}

#[tokio::test]
async fn models_serialize_with_camel_case_keys() {
    let item = article("a1", 5, 15);
    let json = serde_json::to_value(&item).unwrap();

    assert!(json.get("estimatedMinutes").is_some());
    assert!(json.get("rewardXp").is_some());
    assert!(json.get("estimated_minutes").is_none());
}
