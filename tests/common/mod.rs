//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! use common::TestGrid;
//!
//! let mut harness = TestGrid::builder().with_total(120).build();
//! harness.grid.notify_will_display(11);
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use pagegrid::adapters::mock::{MockImageLoader, MockItemSource, RecordingDelegate};
use pagegrid::grid::{GridConfig, GridController, GridMessage, GridSignal};
use pagegrid::images::ImageCache;
use pagegrid::recommendations::RecommendationsScreen;
use pagegrid::traits::PagedItemSource;
use tokio::sync::mpsc;

/// How long [`TestGrid::settle`] and [`settle_screen`] let the clock run.
const SETTLE_TIME: Duration = Duration::from_secs(10);

/// A grid wired to a mock source, a recording delegate and its channel.
pub struct TestGrid {
    pub grid: GridController<MockItemSource>,
    pub delegate: Arc<RecordingDelegate>,
    pub loader: MockImageLoader,
    pub cache: ImageCache,
    pub rx: mpsc::UnboundedReceiver<GridMessage>,
}

impl TestGrid {
    pub fn builder() -> TestGridBuilder {
        TestGridBuilder::default()
    }

    /// Wait for the next message and hand it to the grid.
    pub async fn pump(&mut self) {
        let message = self.rx.recv().await.expect("grid channel closed");
        self.grid.handle_message(message);
    }

    /// Let every timer run out and apply whatever arrives.
    pub async fn settle(&mut self) {
        tokio::time::sleep(SETTLE_TIME).await;
        while let Ok(message) = self.rx.try_recv() {
            self.grid.handle_message(message);
        }
    }

    /// Signals that reveal items: reloads and fetched pages.
    pub fn fetch_signals(&mut self) -> Vec<GridSignal> {
        fetches_only(self.grid.take_signals())
    }
}

/// Keep only the signals that reveal items: reloads and fetched pages.
pub fn fetches_only(signals: Vec<GridSignal>) -> Vec<GridSignal> {
    signals
        .into_iter()
        .filter(|s| matches!(s, GridSignal::Reload { .. } | GridSignal::FetchRange { .. }))
        .collect()
}

/// Builder for [`TestGrid`].
pub struct TestGridBuilder {
    total: usize,
    config: GridConfig,
    loader: MockImageLoader,
}

impl Default for TestGridBuilder {
    fn default() -> Self {
        Self {
            total: 120,
            config: GridConfig::default(),
            loader: MockImageLoader::new(),
        }
    }
}

impl TestGridBuilder {
    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    pub fn with_config(mut self, config: GridConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_loader(mut self, loader: MockImageLoader) -> Self {
        self.loader = loader;
        self
    }

    pub fn build(self) -> TestGrid {
        let (tx, rx) = mpsc::unbounded_channel();
        let delegate = Arc::new(RecordingDelegate::new());
        let cache = ImageCache::new();
        let source = MockItemSource::new(self.total).with_loader(Arc::new(self.loader.clone()));
        let grid = GridController::new(source, delegate.clone(), cache.clone(), self.config, tx)
            .expect("test config must be valid");
        TestGrid {
            grid,
            delegate,
            loader: self.loader,
            cache,
            rx,
        }
    }
}

/// A recommendations screen over a [`TestGrid`], without its model texts.
pub fn test_screen(
    harness: TestGrid,
) -> (RecommendationsScreen<MockItemSource>, mpsc::UnboundedReceiver<GridMessage>) {
    (RecommendationsScreen::new(harness.grid, None), harness.rx)
}

/// [`TestGrid::settle`] for a screen built with [`test_screen`].
pub async fn settle_screen<S: PagedItemSource>(
    screen: &mut RecommendationsScreen<S>,
    rx: &mut mpsc::UnboundedReceiver<GridMessage>,
) {
    tokio::time::sleep(SETTLE_TIME).await;
    while let Ok(message) = rx.try_recv() {
        screen.handle_message(message);
    }
}
