//! Values flowing between the grid, its timers and the host.

use std::ops::Range;

use crate::images::{ImageLoaded, SlotId};

/// Instruction for the rendering surface, drained with
/// [`GridController::take_signals`](super::GridController::take_signals).
#[derive(Debug, Clone, PartialEq)]
pub enum GridSignal {
    /// Re-render the whole visible range
    Reload { range: Range<usize> },
    /// Insert the newly paged-in items
    FetchRange { range: Range<usize> },
    /// Stop the pull-to-refresh indicator
    EndRefreshing,
    /// Re-render one item
    ItemUpdated { index: usize },
    ScrollToTop,
    /// An image landed in `slot`, which shows item `index`
    ImageReady { slot: SlotId, index: usize },
}

/// Asynchronous completion delivered to the host's event loop.
///
/// The host forwards each message to the controller that created it.
#[derive(Debug)]
pub enum GridMessage {
    /// The coalescing delay for page `generation` elapsed
    PageDelayElapsed { generation: u64 },
    ImageLoaded(ImageLoaded),
}

/// What a will-display notification did to the page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingOutcome {
    /// Everything available is already visible
    Exhausted,
    /// The retry view is showing; paging waits for a reload
    Frozen,
    /// The index is not near the end of the window
    BelowThreshold,
    /// A page is already waiting for its delay to elapse
    Coalesced,
    /// A page was revealed and its delay started
    Scheduled,
    /// A page was revealed but fetching is suspended by the consent overlay
    Suppressed,
}

impl PagingOutcome {
    /// True if the window grew.
    pub fn grew(&self) -> bool {
        matches!(self, PagingOutcome::Scheduled | PagingOutcome::Suppressed)
    }
}
