//! Integration tests for drawing seats through a running board.

mod helpers;

use std::collections::HashSet;
use std::time::Duration;

use seatdraw_core::events::{BoardEvent, DrawFailure};

#[tokio::test]
async fn test_every_seat_is_drawn_exactly_once() {
    let board = helpers::TestBoard::new().await;
    let handle = board.handle();

    let mut drawn = HashSet::new();
    for _ in 0..6 {
        let seat = helpers::draw_once(handle).await;
        assert!(seat.assigned);
        assert!(drawn.insert(seat.id), "seat {} drawn twice", seat.id);
    }

    let view = handle.snapshot().await.unwrap();
    assert_eq!(view.free_count(), 0);
    assert!(view.seats.iter().all(|s| s.assigned));

    let mut events = handle.subscribe();
    let err = handle.draw().await.unwrap_err();
    assert!(err.is_no_available_seats());
    assert_eq!(err.message, "No available seats left to draw");

    let envelope = events.recv().await.unwrap();
    assert_eq!(
        envelope.payload,
        BoardEvent::DrawFailed {
            reason: DrawFailure::NoAvailableSeats
        }
    );
}

#[tokio::test]
async fn test_highlights_only_visit_free_seats() {
    let board = helpers::TestBoard::new().await;
    let handle = board.handle();

    helpers::draw_once(handle).await;
    helpers::draw_once(handle).await;

    let before = handle.snapshot().await.unwrap();
    let free: HashSet<_> = before
        .seats
        .iter()
        .filter(|s| s.is_free())
        .map(|s| s.id)
        .collect();

    let mut events = handle.subscribe();
    let started = handle.draw().await.unwrap();
    let (highlights, seat) = helpers::until_completed(&mut events).await;

    assert_eq!(highlights.len() as u32, started.total_ticks);
    assert_eq!(started.candidates, free.len());
    assert!(highlights.iter().all(|id| free.contains(id)));
    assert!(free.contains(&seat.id));
    assert_eq!(highlights.last(), Some(&seat.id));
}

#[tokio::test]
async fn test_concurrent_draws_start_once() {
    let board = helpers::TestBoard::new().await;
    let first = board.handle().clone();
    let second = board.handle().clone();
    let mut events = board.handle().subscribe();

    let (a, b) = tokio::join!(first.draw(), second.draw());
    let outcomes = [a, b];
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        outcomes
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| e.is_draw_in_progress())
    );

    helpers::until_completed(&mut events).await;
    let view = board.handle().snapshot().await.unwrap();
    assert_eq!(view.free_count(), 5);
}

#[tokio::test]
async fn test_count_change_mid_draw_discards_it() {
    let board = helpers::TestBoard::with_config(|c| c.draw.base_delay_ms = 50).await;
    let handle = board.handle();
    let mut events = handle.subscribe();

    handle.draw().await.unwrap();
    let applied = handle.set_seat_count(10).await.unwrap();
    assert_eq!(applied, 10);

    // Longer than any draw with this tuning.
    tokio::time::sleep(Duration::from_millis(800)).await;

    let mut saw_new_pool = false;
    while let Ok(envelope) = events.try_recv() {
        match envelope.payload {
            BoardEvent::PoolChanged { seat_count, .. } => {
                assert_eq!(seat_count, 10);
                saw_new_pool = true;
            }
            BoardEvent::Highlight { .. } => assert!(!saw_new_pool, "highlight after reset"),
            BoardEvent::DrawCompleted { .. } => panic!("interrupted draw committed"),
            _ => {}
        }
    }
    assert!(saw_new_pool);

    let view = handle.snapshot().await.unwrap();
    assert_eq!(view.seats.len(), 10);
    assert_eq!(view.free_count(), 10);
    assert!(!view.drawing);
}

#[tokio::test]
async fn test_reset_frees_every_seat() {
    let board = helpers::TestBoard::new().await;
    let handle = board.handle();
    helpers::draw_once(handle).await;
    helpers::draw_once(handle).await;

    let generation = handle.reset().await.unwrap();
    let view = handle.snapshot().await.unwrap();
    assert_eq!(view.generation, generation);
    assert_eq!(view.seat_count, 6);
    assert_eq!(view.free_count(), 6);
    assert_eq!(view.seats, seatdraw_engine::generate(6));
}

#[tokio::test]
async fn test_event_sequence_is_increasing() {
    let board = helpers::TestBoard::new().await;
    let mut events = board.handle().subscribe();
    helpers::draw_once(board.handle()).await;
    board.handle().reset().await.unwrap();

    let mut last = 0;
    while let Ok(envelope) = events.try_recv() {
        assert!(envelope.sequence > last);
        last = envelope.sequence;
    }
    assert!(last > 0);
}

#[tokio::test]
async fn test_seat_count_input_is_normalized() {
    let board = helpers::TestBoard::new().await;
    let handle = board.handle();

    assert_eq!(handle.set_seat_count_input("7").await.unwrap(), 7);
    assert_eq!(handle.set_seat_count_input("seven").await.unwrap(), 2);
    assert_eq!(handle.set_seat_count_input("-1").await.unwrap(), 2);
    assert_eq!(handle.set_seat_count_input("1000").await.unwrap(), 100);

    let view = handle.snapshot().await.unwrap();
    assert_eq!(view.seat_count, 100);
    let top = view
        .seats
        .iter()
        .filter(|s| s.side == seatdraw_core::types::Side::Top)
        .count();
    assert_eq!(top, 50);
}
