mod common;

use common::open_engine;
use readquest::LeaderboardEntry;

fn entry(user_id: &str, total_xp: u64) -> LeaderboardEntry {
    LeaderboardEntry {
        user_id: user_id.to_string(),
        display_name: format!("User {user_id}"),
        total_xp,
    }
}

#[tokio::test]
async fn standings_are_ranked_by_xp_descending() {
    let (_dir, engine) = open_engine().await;
    let board = engine.leaderboard();

    board.upsert(entry("alice", 120)).await.unwrap();
    board.upsert(entry("bob", 400)).await.unwrap();
    board.upsert(entry("carol", 250)).await.unwrap();

    let standings = board.standings();
    let order: Vec<(&str, u32)> = standings
        .iter()
        .map(|r| (r.user_id.as_str(), r.rank))
        .collect();
    assert_eq!(order, vec![("bob", 1), ("carol", 2), ("alice", 3)]);
}

#[tokio::test]
async fn tied_entries_keep_insertion_order() {
    let (_dir, engine) = open_engine().await;
    let board = engine.leaderboard();

    board.upsert(entry("first", 100)).await.unwrap();
    board.upsert(entry("second", 100)).await.unwrap();
    board.upsert(entry("third", 100)).await.unwrap();

    let order: Vec<String> = board.standings().into_iter().map(|r| r.user_id).collect();
    assert_eq!(order, vec!["first", "second", "third"]);

    // Refreshing a tied entry's display name must not shuffle it.
    let mut renamed = entry("first", 100);
    renamed.display_name = "Renamed".to_string();
    board.upsert(renamed).await.unwrap();

    let order: Vec<String> = board.standings().into_iter().map(|r| r.user_id).collect();
    assert_eq!(order, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn top_n_slices_the_ranked_order() {
    let (_dir, engine) = open_engine().await;
    let board = engine.leaderboard();

    for (user, xp) in [("a", 10), ("b", 50), ("c", 30), ("d", 40)] {
        board.upsert(entry(user, xp)).await.unwrap();
    }

    let top = board.top(2).await.unwrap();
    let order: Vec<&str> = top.iter().map(|r| r.user_id.as_str()).collect();
    assert_eq!(order, vec!["b", "d"]);

    assert_eq!(board.top(100).await.unwrap().len(), 4);
}

#[tokio::test]
async fn upsert_updates_xp_and_reranks() {
    let (_dir, engine) = open_engine().await;
    let board = engine.leaderboard();

    board.upsert(entry("alice", 10)).await.unwrap();
    board.upsert(entry("bob", 20)).await.unwrap();
    assert_eq!(board.standings()[0].user_id, "bob");

    board.upsert(entry("alice", 30)).await.unwrap();
    let standings = board.standings();
    assert_eq!(standings[0].user_id, "alice");
    assert_eq!(standings[0].rank, 1);
    assert_eq!(standings.len(), 2);
}

#[tokio::test]
async fn removal_reranks_and_reports_absence() {
    let (_dir, engine) = open_engine().await;
    let board = engine.leaderboard();

    board.upsert(entry("alice", 10)).await.unwrap();
    board.upsert(entry("bob", 20)).await.unwrap();

    assert!(board.remove("bob").await.unwrap());
    assert!(!board.remove("bob").await.unwrap());

    let standings = board.standings();
    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].user_id, "alice");
    assert_eq!(standings[0].rank, 1);
}

#[tokio::test]
async fn standings_stream_follows_changes() {
    let (_dir, engine) = open_engine().await;
    let board = engine.leaderboard();

    let mut rx = board.watch();
    assert!(rx.borrow().is_empty());

    board.upsert(entry("alice", 10)).await.unwrap();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().len(), 1);
}

#[tokio::test]
async fn local_ledger_and_leaderboard_stay_independent() {
    let (_dir, engine) = open_engine().await;

    engine.leaderboard().upsert(entry("alice", 10)).await.unwrap();
    engine.ledger().award_xp(500).await.unwrap();

    // The local user's progress never appears as a leaderboard entry and
    // existing entries are untouched by local awards.
    let standings = engine.leaderboard().standings();
    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].total_xp, 10);
}
