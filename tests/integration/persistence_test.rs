//! Integration tests for restoring board state from the JSON cache file.

mod helpers;

use std::collections::BTreeMap;

use seatdraw_core::events::BoardEvent;
use seatdraw_core::types::Seat;

fn read_cache_file(path: &std::path::Path) -> BTreeMap<String, String> {
    let content = std::fs::read_to_string(path).expect("Cache file missing");
    serde_json::from_str(&content).expect("Cache file is not a JSON object")
}

#[tokio::test]
async fn test_board_state_is_written_on_start() {
    let board = helpers::TestBoard::new().await;
    // A snapshot round trip orders this after the initial persist.
    board.handle().snapshot().await.unwrap();

    let doc = read_cache_file(&board.cache_path());
    assert_eq!(doc.get("seat-draw:seat-count").map(String::as_str), Some("6"));

    let seats: Vec<Seat> = serde_json::from_str(&doc["seat-draw:seats"]).unwrap();
    assert_eq!(seats, seatdraw_engine::generate(6));
}

#[tokio::test]
async fn test_assignments_survive_restart() {
    let board = helpers::TestBoard::new().await;
    let first = helpers::draw_once(board.handle()).await;
    let second = helpers::draw_once(board.handle()).await;
    let before = board.handle().snapshot().await.unwrap();

    let mut board = board.restart().await;
    let view = board.handle().snapshot().await.unwrap();
    assert_eq!(view.seats, before.seats);
    assert_eq!(view.free_count(), 4);
    for drawn in [first, second] {
        assert!(view.seats.iter().any(|s| s.id == drawn.id && s.assigned));
    }

    match board.runtime.events.recv().await.unwrap().payload {
        BoardEvent::PoolChanged { seats, .. } => assert_eq!(seats, before.seats),
        other => panic!("unexpected first event {other:?}"),
    }
}

#[tokio::test]
async fn test_seat_count_survives_restart() {
    let board = helpers::TestBoard::new().await;
    board.handle().set_seat_count(11).await.unwrap();

    let board = board.restart().await;
    let view = board.handle().snapshot().await.unwrap();
    assert_eq!(view.seat_count, 11);
    assert_eq!(view.seats, seatdraw_engine::generate(11));
}

#[tokio::test]
async fn test_corrupt_cache_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seat-draw.json");
    std::fs::write(&path, "{\"seat-draw:seat-count\": ").unwrap();

    let config = helpers::test_config(&path);
    let runtime = helpers::start(&config).await;
    let view = runtime.handle.snapshot().await.unwrap();
    assert_eq!(view.seat_count, 6);
    assert_eq!(view.free_count(), 6);

    // The first write replaces the unreadable document.
    let doc = read_cache_file(&path);
    assert_eq!(doc.get("seat-draw:seat-count").map(String::as_str), Some("6"));
}

#[tokio::test]
async fn test_mismatched_seats_are_regenerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seat-draw.json");
    let mut stale = seatdraw_engine::generate(3);
    stale[0].assigned = true;
    let doc = BTreeMap::from([
        ("seat-draw:seat-count".to_string(), "8".to_string()),
        (
            "seat-draw:seats".to_string(),
            serde_json::to_string(&stale).unwrap(),
        ),
    ]);
    std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

    let config = helpers::test_config(&path);
    let runtime = helpers::start(&config).await;
    let view = runtime.handle.snapshot().await.unwrap();
    assert_eq!(view.seat_count, 8);
    assert_eq!(view.seats, seatdraw_engine::generate(8));
}

#[tokio::test]
async fn test_out_of_range_count_is_clamped_on_restore() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seat-draw.json");
    let doc = BTreeMap::from([("seat-draw:seat-count".to_string(), "500".to_string())]);
    std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

    let config = helpers::test_config(&path);
    let runtime = helpers::start(&config).await;
    let view = runtime.handle.snapshot().await.unwrap();
    assert_eq!(view.seat_count, 100);
    assert_eq!(view.seats.len(), 100);
}

#[tokio::test]
async fn test_draw_in_flight_at_shutdown_is_kept() {
    let board = helpers::TestBoard::with_config(|c| c.draw.base_delay_ms = 20).await;
    board.handle().draw().await.unwrap();
    board.handle().wait_idle().await.unwrap();

    let board = board.restart().await;
    let view = board.handle().snapshot().await.unwrap();
    assert_eq!(view.free_count(), 5);
}

#[tokio::test]
async fn test_unwritable_cache_still_draws() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seat-draw.json");
    std::fs::create_dir(&path).unwrap();

    let config = helpers::test_config(&path);
    let runtime = helpers::start(&config).await;
    let seat = helpers::draw_once(&runtime.handle).await;
    assert!(seat.assigned);

    let view = runtime.handle.snapshot().await.unwrap();
    assert_eq!(view.seat_count, 6);
    assert_eq!(view.free_count(), 5);
    assert!(view.seats.iter().any(|s| s.id == seat.id && s.assigned));
    assert!(path.is_dir());
}
