//! Incremental paging grid controller.
//!
//! [`GridController`] owns the page window, the retry view state and the
//! pull-to-refresh state for one rendering surface. The surface reports
//! which items it is about to show; the controller decides when to reveal
//! the next page and tells the surface what to redraw through
//! [`GridSignal`]s.
//!
//! Paging triggers are coalesced: the first trigger past the look-ahead
//! threshold grows the window and starts a [`Debouncer`]; the fetch signal
//! for the grown range is emitted once the delay elapses. Triggers arriving
//! while a page is pending do nothing.

use std::ops::Range;
use std::sync::Arc;

use tokio::sync::mpsc;

use super::config::GridConfig;
use super::signals::{GridMessage, GridSignal, PagingOutcome};
use crate::consent::OverlayTarget;
use crate::debounce::Debouncer;
use crate::domain::{PageWindow, RefreshState, RetryState};
use crate::error::{GridError, PageGridResult};
use crate::images::{CellSlots, ImageCache, ImageLoaded, SlotId, SlotImage};
use crate::traits::{GridDelegate, PagedItemSource, RenderVariant};

/// A grown range waiting for its coalescing delay.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingPage {
    generation: u64,
    range: Range<usize>,
}

/// Headless controller for a lazily paged grid of items.
pub struct GridController<S: PagedItemSource> {
    config: GridConfig,
    source: S,
    delegate: Arc<dyn GridDelegate>,
    window: PageWindow,
    retry: RetryState,
    refresh: RefreshState,
    /// Set while the consent overlay covers the grid
    fetch_suspended: bool,
    pending: Option<PendingPage>,
    generation: u64,
    debouncer: Debouncer<GridMessage>,
    slots: CellSlots,
    tx: mpsc::UnboundedSender<GridMessage>,
    signals: Vec<GridSignal>,
}

impl<S: PagedItemSource> GridController<S> {
    /// Create a controller over `source`.
    ///
    /// Timer expiries and image completions are sent on `tx`; the host's
    /// event loop must hand them back through [`GridController::handle_message`].
    ///
    /// Fails with [`GridError::InvalidConfig`] if `config` cannot page.
    pub fn new(
        source: S,
        delegate: Arc<dyn GridDelegate>,
        cache: ImageCache,
        config: GridConfig,
        tx: mpsc::UnboundedSender<GridMessage>,
    ) -> PageGridResult<Self> {
        config.validate()?;

        let mut window = PageWindow::new(config.initial_visible);
        window.observe_total(source.count());

        Ok(Self {
            debouncer: Debouncer::new(config.coalesce_delay, tx.clone()),
            config,
            source,
            delegate,
            window,
            retry: RetryState::Hidden,
            refresh: RefreshState::default(),
            fetch_suspended: false,
            pending: None,
            generation: 0,
            slots: CellSlots::new(cache),
            tx,
            signals: Vec::new(),
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the source. Call [`GridController::reload`] or
    /// [`GridController::update_item`] afterwards so the surface catches up.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    pub fn visible_count(&self) -> usize {
        self.window.visible_count()
    }

    pub fn effective_count(&self) -> usize {
        self.window.effective_count()
    }

    pub fn retry_state(&self) -> RetryState {
        self.retry
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh.refreshing
    }

    pub fn is_refresh_enabled(&self) -> bool {
        self.refresh.enabled
    }

    pub fn is_fetch_suspended(&self) -> bool {
        self.fetch_suspended
    }

    /// Range revealed by the last trigger whose fetch signal is still due.
    pub fn pending_range(&self) -> Option<Range<usize>> {
        self.pending.as_ref().map(|p| p.range.clone())
    }

    /// Drain the signals emitted since the last call.
    pub fn take_signals(&mut self) -> Vec<GridSignal> {
        std::mem::take(&mut self.signals)
    }

    // ========================================================================
    // Paging
    // ========================================================================

    /// Re-render the visible range from the source.
    ///
    /// Hides the retry view, cancels the coalescing timer and clears the
    /// pending page, since the reload covers it. While fetching is suspended
    /// nothing is emitted and the pending page is kept; returns the reloaded
    /// range otherwise.
    pub fn reload(&mut self) -> Option<Range<usize>> {
        self.retry = RetryState::Hidden;
        self.debouncer.cancel();
        self.window.observe_total(self.source.count());

        if self.fetch_suspended {
            tracing::debug!("Reload withheld while fetching is suspended");
            return None;
        }

        self.pending = None;
        let range = self.window.visible_range();
        tracing::debug!(
            visible = self.window.visible_count(),
            total = self.window.total_available(),
            "Reloading grid"
        );
        self.signals.push(GridSignal::Reload {
            range: range.clone(),
        });
        Some(range)
    }

    /// Shrink the window back to its initial size and reload.
    pub fn reset_window(&mut self) -> Option<Range<usize>> {
        self.window.reset();
        self.pending = None;
        self.reload()
    }

    /// The surface is about to show `index`. Grows the window when `index`
    /// is within the look-ahead distance of its end.
    pub fn notify_will_display(&mut self, index: usize) -> PagingOutcome {
        self.delegate.will_display_item(index);
        self.window.observe_total(self.source.count());

        if self.window.is_exhausted() {
            return PagingOutcome::Exhausted;
        }
        if self.retry.blocks_paging() {
            return PagingOutcome::Frozen;
        }
        if !self.window.crosses_threshold(index, self.config.lookahead) {
            return PagingOutcome::BelowThreshold;
        }
        if self.pending.is_some() {
            return PagingOutcome::Coalesced;
        }

        let range = self.window.grow(self.config.page_size);
        self.generation += 1;
        let generation = self.generation;
        tracing::debug!(
            index,
            generation,
            start = range.start,
            end = range.end,
            "Paging in next page"
        );
        self.pending = Some(PendingPage { generation, range });

        if self.fetch_suspended {
            return PagingOutcome::Suppressed;
        }
        self.start_page_delay(generation);
        PagingOutcome::Scheduled
    }

    fn start_page_delay(&mut self, generation: u64) {
        if !self
            .debouncer
            .schedule(GridMessage::PageDelayElapsed { generation })
        {
            // Without a runtime there is no timer, so the page is due now
            self.on_page_delay_elapsed(generation);
        }
    }

    fn on_page_delay_elapsed(&mut self, generation: u64) {
        let current = matches!(&self.pending, Some(p) if p.generation == generation);
        if !current {
            tracing::trace!(generation, "Ignoring stale page delay");
            return;
        }
        if self.fetch_suspended || self.retry.blocks_paging() {
            tracing::debug!(
                generation,
                retry = ?self.retry,
                "Page delay elapsed while paging is blocked"
            );
            return;
        }

        if let Some(page) = self.pending.take() {
            tracing::debug!(start = page.range.start, end = page.range.end, "Fetching page");
            self.signals.push(GridSignal::FetchRange { range: page.range });
        }
    }

    /// Show the retry view. Paging stays frozen until a retry or reload.
    pub fn report_load_failure(&mut self) {
        tracing::warn!(
            visible = self.window.visible_count(),
            "Page load failed, offering retry"
        );
        self.retry = RetryState::LabelAndButton;
        self.end_refreshing();
        self.debouncer.cancel();
    }

    /// The user tapped the retry button.
    pub fn retry_failed_load(&mut self) -> PageGridResult<()> {
        if !self.retry.can_retry() {
            return Err(GridError::InvalidRetryState {
                expected: RetryState::LabelAndButton,
                actual: self.retry,
            }
            .into());
        }

        self.retry = RetryState::Loading;
        self.delegate.did_select_retry();
        self.reload();
        Ok(())
    }

    // ========================================================================
    // Refresh
    // ========================================================================

    /// Offer or withdraw pull-to-refresh. Withdrawing stops a running indicator.
    pub fn set_refresh_enabled(&mut self, enabled: bool) {
        self.refresh.enabled = enabled;
        if !enabled {
            self.end_refreshing();
        }
    }

    /// The user pulled to refresh. Returns false if refreshing is not
    /// possible right now.
    pub fn begin_refreshing(&mut self) -> bool {
        if self.fetch_suspended {
            tracing::debug!("Refresh refused while the consent overlay is visible");
            return false;
        }
        if !self.refresh.begin() {
            return false;
        }
        self.delegate.did_start_refreshing();
        true
    }

    /// Stop the refresh indicator if it is spinning.
    pub fn end_refreshing(&mut self) {
        if self.refresh.end() {
            self.signals.push(GridSignal::EndRefreshing);
        }
    }

    // ========================================================================
    // Items
    // ========================================================================

    fn assert_visible(&self, index: usize) {
        assert!(
            index < self.window.effective_count(),
            "index {} outside visible range 0..{}",
            index,
            self.window.effective_count()
        );
    }

    /// Model for a visible item.
    ///
    /// # Panics
    ///
    /// If `index` is not below the effective visible count.
    pub fn item(&self, index: usize) -> S::Item {
        self.assert_visible(index);
        self.source.item_at(index)
    }

    pub fn cell_height(&self, index: usize, width: f32) -> f32 {
        let item = self.item(index);
        self.source.height_for(&item, width)
    }

    pub fn variant(&self, index: usize) -> RenderVariant {
        let item = self.item(index);
        self.source.variant_for(&item)
    }

    pub fn select_item(&self, index: usize) {
        self.assert_visible(index);
        self.delegate.did_select_item(index);
    }

    /// The favourite button of `index` was tapped while showing `is_favorite`.
    pub fn toggle_favorite(&self, index: usize, is_favorite: bool) {
        self.assert_visible(index);
        self.delegate.did_select_favorite(index, is_favorite);
    }

    /// Store a confirmed favourite state and redraw the item. Returns false
    /// if the item is not visible.
    pub fn update_item(&mut self, index: usize, is_favorite: bool) -> bool {
        if index >= self.window.effective_count() {
            return false;
        }
        self.source.set_favorite(index, is_favorite);
        self.signals.push(GridSignal::ItemUpdated { index });
        true
    }

    pub fn did_scroll(&self, offset_y: f32) {
        self.delegate.did_scroll(offset_y);
    }

    pub fn scroll_to_top(&mut self) {
        self.signals.push(GridSignal::ScrollToTop);
    }

    // ========================================================================
    // Cells
    // ========================================================================

    /// Show item `index` in `slot`, cancelling the slot's previous image load.
    pub fn bind_cell(&mut self, slot: SlotId, index: usize, width: f32) -> SlotImage {
        let item = self.item(index);
        let path = self.source.image_path(&item);
        let source = &self.source;
        let tx = self.tx.clone();

        self.slots.bind(
            slot,
            index,
            path,
            width,
            |path| source.load_image(path, width),
            move |loaded| {
                let _ = tx.send(GridMessage::ImageLoaded(loaded));
            },
        )
    }

    /// The surface stopped showing `slot`.
    pub fn unbind_cell(&mut self, slot: SlotId) -> bool {
        self.slots.release(slot)
    }

    pub fn slot_image(&self, slot: SlotId) -> Option<Arc<crate::images::DecodedImage>> {
        self.slots.image(slot)
    }

    pub fn is_slot_loading(&self, slot: SlotId) -> bool {
        self.slots.is_loading(slot)
    }

    pub fn cache(&self) -> &ImageCache {
        self.slots.cache()
    }

    fn on_image_loaded(&mut self, loaded: ImageLoaded) {
        let slot = loaded.slot;
        if let Some(index) = self.slots.apply(loaded) {
            self.signals.push(GridSignal::ImageReady { slot, index });
        }
    }

    /// Apply an asynchronous completion received from the event loop.
    pub fn handle_message(&mut self, message: GridMessage) {
        match message {
            GridMessage::PageDelayElapsed { generation } => self.on_page_delay_elapsed(generation),
            GridMessage::ImageLoaded(loaded) => self.on_image_loaded(loaded),
        }
    }
}

impl<S: PagedItemSource> OverlayTarget for GridController<S> {
    fn end_refreshing(&mut self) {
        GridController::end_refreshing(self);
    }

    fn set_fetch_suspended(&mut self, suspended: bool) {
        if self.fetch_suspended == suspended {
            return;
        }
        self.fetch_suspended = suspended;
        tracing::debug!(suspended, "Grid fetching suspension changed");

        // A page revealed while suspended still needs its delay. Without a
        // runtime it stays pending until the next reload.
        if !suspended && !self.retry.blocks_paging() {
            if let Some(generation) = self.pending.as_ref().map(|p| p.generation) {
                self.debouncer
                    .schedule(GridMessage::PageDelayElapsed { generation });
            }
        }
    }
}
