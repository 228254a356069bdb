mod common;

use std::time::Duration;

use common::{article, open_engine};
use readquest::EngineError;

#[tokio::test]
async fn creating_notes_pays_the_bonus_and_editing_does_not() {
    let (_dir, engine) = open_engine().await;
    engine.catalog().insert(article("a1", 5, 15)).await.unwrap();

    let first = engine.notes().create("a1", "opening thought").await.unwrap();
    let second = engine.notes().create("a1", "second thought").await.unwrap();
    assert_eq!(engine.ledger().current().total_xp, 10);

    engine.notes().update(&first.id, "revised").await.unwrap();
    engine.notes().update(&second.id, "also revised").await.unwrap();
    assert_eq!(engine.ledger().current().total_xp, 10);
}

#[tokio::test]
async fn blank_text_is_rejected_before_storage() {
    let (_dir, engine) = open_engine().await;
    engine.catalog().insert(article("a1", 5, 15)).await.unwrap();

    for text in ["", "   ", "\n\t"] {
        let err = engine.notes().create("a1", text).await.unwrap_err();
        assert!(matches!(err, EngineError::Validation { field: "text", .. }));
    }

    assert!(engine.notes().list_all().await.unwrap().is_empty());
    // No bonus for rejected creations.
    assert_eq!(engine.ledger().current().total_xp, 0);

    let note = engine.notes().create("a1", "kept").await.unwrap();
    let err = engine.notes().update(&note.id, "  ").await.unwrap_err();
    assert!(matches!(err, EngineError::Validation { field: "text", .. }));
    assert_eq!(engine.notes().get(&note.id).await.unwrap().unwrap().text, "kept");
}

#[tokio::test]
async fn lists_are_newest_first() {
    let (_dir, engine) = open_engine().await;
    engine.catalog().insert(article("a1", 5, 15)).await.unwrap();
    engine.catalog().insert(article("a2", 5, 15)).await.unwrap();

    engine.notes().create("a1", "oldest").await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    engine.notes().create("a2", "middle").await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    engine.notes().create("a1", "newest").await.unwrap();

    let all: Vec<String> = engine
        .notes()
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.text)
        .collect();
    assert_eq!(all, vec!["newest", "middle", "oldest"]);

    let for_a1: Vec<String> = engine
        .notes()
        .list_by_content_item("a1")
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.text)
        .collect();
    assert_eq!(for_a1, vec!["newest", "oldest"]);
}

#[tokio::test]
async fn missing_notes_are_reported_as_absent() {
    let (_dir, engine) = open_engine().await;

    assert!(engine.notes().get("ghost").await.unwrap().is_none());
    assert!(engine.notes().update("ghost", "text").await.unwrap().is_none());
    assert!(!engine.notes().delete("ghost").await.unwrap());
}

#[tokio::test]
async fn note_for_unknown_content_item_is_a_storage_error() {
    let (_dir, engine) = open_engine().await;

    let err = engine.notes().create("nowhere", "text").await.unwrap_err();
    assert!(matches!(err, EngineError::Storage(_)));
}

#[tokio::test]
async fn deleting_a_content_item_cascades_to_its_notes() {
    let (_dir, engine) = open_engine().await;
    engine.catalog().insert(article("a1", 5, 15)).await.unwrap();
    engine.catalog().insert(article("a2", 5, 15)).await.unwrap();

    engine.notes().create("a1", "one").await.unwrap();
    engine.notes().create("a1", "two").await.unwrap();
    engine.notes().create("a2", "kept").await.unwrap();
    let xp_before = engine.ledger().current().total_xp;

    assert!(engine.remove_content_item("a1").await.unwrap());

    // Zero notes reference the removed item; the engine issued no cleanup
    // of its own, the FK cascade did the work.
    assert!(engine
        .notes()
        .list_by_content_item("a1")
        .await
        .unwrap()
        .is_empty());

    let remaining = engine.notes().list_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].text, "kept");

    // Cascade deletion never touches XP.
    assert_eq!(engine.ledger().current().total_xp, xp_before);

    // The note stream was republished without the dead notes.
    let rx = engine.notes().watch();
    assert_eq!(rx.borrow().len(), 1);
}

#[tokio::test]
async fn delete_and_get_round_out_the_lifecycle() {
    let (_dir, engine) = open_engine().await;
    engine.catalog().insert(article("a1", 5, 15)).await.unwrap();

    let note = engine.notes().create("a1", "ephemeral").await.unwrap();
    assert!(engine.notes().get(&note.id).await.unwrap().is_some());

    assert!(engine.notes().delete(&note.id).await.unwrap());
    assert!(engine.notes().get(&note.id).await.unwrap().is_none());
    assert!(!engine.notes().delete(&note.id).await.unwrap());
}
