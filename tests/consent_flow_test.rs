//! Consent overlay gating of the recommendations grid.

mod common;

use common::{fetches_only, settle_screen, test_screen, TestGrid};
use pagegrid::grid::{GridSignal, PagingOutcome};

#[tokio::test(start_paused = true)]
async fn test_no_fetch_while_visible_then_one_after_accept() {
    let (mut screen, mut rx) = test_screen(TestGrid::builder().build());
    screen.show_inline_consent(None);

    assert_eq!(
        screen.grid_mut().notify_will_display(18),
        PagingOutcome::Suppressed
    );
    assert_eq!(
        screen.grid_mut().notify_will_display(25),
        PagingOutcome::Coalesced
    );
    settle_screen(&mut screen, &mut rx).await;
    assert!(fetches_only(screen.take_signals()).is_empty());

    screen.consent_primary_action();
    settle_screen(&mut screen, &mut rx).await;
    assert_eq!(
        fetches_only(screen.take_signals()),
        vec![GridSignal::Reload { range: 0..30 }]
    );
}

#[tokio::test(start_paused = true)]
async fn test_page_scheduled_before_overlay_waits_for_it() {
    let (mut screen, mut rx) = test_screen(TestGrid::builder().build());

    assert_eq!(
        screen.grid_mut().notify_will_display(12),
        PagingOutcome::Scheduled
    );
    screen.show_inline_consent(Some("Please review"));
    settle_screen(&mut screen, &mut rx).await;
    assert!(fetches_only(screen.take_signals()).is_empty());

    // Hiding without a reload lets the outstanding page through once
    screen.hide_inline_consent();
    settle_screen(&mut screen, &mut rx).await;
    assert_eq!(
        fetches_only(screen.take_signals()),
        vec![GridSignal::FetchRange { range: 20..30 }]
    );
}

#[tokio::test(start_paused = true)]
async fn test_overlay_stops_refresh_and_refuses_new_one() {
    let (mut screen, _rx) = test_screen(TestGrid::builder().build());
    screen.set_refresh_enabled(true);
    assert!(screen.grid_mut().begin_refreshing());

    screen.show_inline_consent(None);
    assert!(!screen.grid().is_refreshing());
    assert!(!screen.grid_mut().begin_refreshing());

    screen.hide_inline_consent();
    assert!(screen.grid_mut().begin_refreshing());
}
