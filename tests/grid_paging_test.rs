//! Paging behaviour of the grid controller driven through its public API.

mod common;

use std::time::Duration;

use common::TestGrid;
use pagegrid::adapters::mock::{DelegateEvent, MockImageLoader};
use pagegrid::domain::RetryState;
use pagegrid::grid::{GridConfig, GridSignal, PagingOutcome};
use pagegrid::images::SlotId;

#[tokio::test(start_paused = true)]
async fn test_coalesced_triggers_grow_window_once() {
    let mut harness = TestGrid::builder().with_total(120).build();

    assert_eq!(harness.grid.notify_will_display(11), PagingOutcome::Scheduled);
    assert_eq!(harness.grid.notify_will_display(5), PagingOutcome::Coalesced);
    assert_eq!(harness.grid.visible_count(), 30);

    harness.settle().await;
    assert_eq!(
        harness.fetch_signals(),
        vec![GridSignal::FetchRange { range: 20..30 }]
    );
    assert_eq!(harness.grid.visible_count(), 30);
}

#[tokio::test(start_paused = true)]
async fn test_window_past_total_is_noop() {
    let mut harness = TestGrid::builder()
        .with_total(25)
        .with_config(GridConfig::default().with_initial_visible(30))
        .build();

    assert_eq!(harness.grid.notify_will_display(24), PagingOutcome::Exhausted);
    harness.settle().await;
    assert!(harness.grid.take_signals().is_empty());
    assert_eq!(harness.grid.effective_count(), 25);
}

#[tokio::test(start_paused = true)]
async fn test_scrolling_to_end_never_exceeds_total() {
    let mut harness = TestGrid::builder().with_total(57).build();
    let mut previous = harness.grid.visible_count();
    let mut index = 0;

    while index < harness.grid.effective_count() {
        if harness.grid.notify_will_display(index) == PagingOutcome::Scheduled {
            harness.pump().await;
        }
        assert!(harness.grid.visible_count() >= previous);
        assert!(harness.grid.effective_count() <= 57);
        previous = harness.grid.visible_count();
        index += 1;
    }

    assert_eq!(harness.grid.effective_count(), 57);
    let fetched: usize = harness
        .fetch_signals()
        .into_iter()
        .map(|s| match s {
            GridSignal::FetchRange { range } => range.len(),
            _ => 0,
        })
        .sum();
    assert_eq!(fetched, 37);
}

#[tokio::test(start_paused = true)]
async fn test_failure_blocks_fetches_until_retry() {
    let mut harness = TestGrid::builder().build();

    harness.grid.notify_will_display(15);
    harness.grid.report_load_failure();

    for index in 0..30 {
        assert!(!harness.grid.notify_will_display(index).grew());
    }
    harness.settle().await;
    assert!(harness.fetch_signals().is_empty());

    harness.grid.retry_failed_load().unwrap();
    assert_eq!(harness.grid.retry_state(), RetryState::Hidden);
    assert_eq!(harness.delegate.actions(), vec![DelegateEvent::Retry]);
    assert_eq!(
        harness.fetch_signals(),
        vec![GridSignal::Reload { range: 0..30 }]
    );

    // Retrying twice is rejected
    assert!(harness.grid.retry_failed_load().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_reload_twice_shows_same_range() {
    let mut harness = TestGrid::builder().with_total(90).build();
    harness.grid.notify_will_display(12);
    harness.pump().await;
    harness.grid.take_signals();

    let first = harness.grid.reload();
    let second = harness.grid.reload();
    assert_eq!(first, Some(0..30));
    assert_eq!(first, second);
}

#[tokio::test(start_paused = true)]
async fn test_source_growth_picked_up_on_reload() {
    let mut harness = TestGrid::builder().with_total(15).build();
    assert_eq!(harness.grid.reload(), Some(0..15));

    harness.grid.source_mut().push_items(10);
    assert_eq!(harness.grid.reload(), Some(0..20));
}

#[tokio::test(start_paused = true)]
async fn test_reused_slot_ignores_old_image() {
    let loader = MockImageLoader::new().with_delay(Duration::from_millis(100));
    let mut harness = TestGrid::builder().with_loader(loader).build();

    assert!(harness.grid.bind_cell(SlotId(0), 1, 100.0).is_loading());
    // The cell scrolls away and is reused before the image lands
    assert!(harness.grid.bind_cell(SlotId(0), 7, 100.0).is_loading());

    harness.settle().await;
    let ready: Vec<GridSignal> = harness
        .grid
        .take_signals()
        .into_iter()
        .filter(|s| matches!(s, GridSignal::ImageReady { .. }))
        .collect();
    assert_eq!(
        ready,
        vec![GridSignal::ImageReady {
            slot: SlotId(0),
            index: 7
        }]
    );
    assert_eq!(
        harness.grid.slot_image(SlotId(0)).unwrap().key(),
        "https://img.example.com/items/7.jpg"
    );
}

#[tokio::test(start_paused = true)]
async fn test_failed_image_leaves_cache_empty() {
    let loader = MockImageLoader::new();
    loader.fail_path("https://img.example.com/items/3.jpg");
    let mut harness = TestGrid::builder().with_loader(loader).build();

    harness.grid.bind_cell(SlotId(2), 3, 100.0);
    harness.pump().await;

    assert!(harness.grid.slot_image(SlotId(2)).is_none());
    assert!(harness.cache.is_empty());
    assert!(harness.grid.take_signals().is_empty());
}
