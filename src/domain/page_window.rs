//! Page window state.
//!
//! This module provides [`PageWindow`], the materialized prefix of a larger,
//! possibly server-backed item list.

use std::ops::Range;

/// The currently materialized prefix of the item list.
///
/// `visible_count` may run ahead of `total_available`; consumers use
/// [`PageWindow::effective_count`], which clamps it. `visible_count` only
/// grows until [`PageWindow::reset`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Items the source currently reports
    total_available: usize,
    /// Items the grid has revealed so far
    visible_count: usize,
    /// Value restored by `reset`
    initial_visible: usize,
}

impl PageWindow {
    /// Create a window revealing `initial_visible` items.
    pub fn new(initial_visible: usize) -> Self {
        Self {
            total_available: 0,
            visible_count: initial_visible,
            initial_visible,
        }
    }

    pub fn total_available(&self) -> usize {
        self.total_available
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Number of items that may actually be dispatched to the surface.
    pub fn effective_count(&self) -> usize {
        self.visible_count.min(self.total_available)
    }

    /// Range of indices the surface should show.
    pub fn visible_range(&self) -> Range<usize> {
        0..self.effective_count()
    }

    /// Record the total the source reports right now.
    pub fn observe_total(&mut self, total: usize) {
        self.total_available = total;
    }

    /// True once every available item has been revealed.
    pub fn is_exhausted(&self) -> bool {
        self.visible_count >= self.total_available
    }

    /// Whether displaying `index` is close enough to the end to page in more.
    pub fn crosses_threshold(&self, index: usize, lookahead: usize) -> bool {
        index >= self.visible_count.saturating_sub(lookahead)
    }

    /// Grow by `page_size` and return the newly revealed effective range.
    pub fn grow(&mut self, page_size: usize) -> Range<usize> {
        let before = self.effective_count();
        self.visible_count = self.visible_count.saturating_add(page_size);
        before..self.effective_count()
    }

    /// Shrink back to the initial window.
    pub fn reset(&mut self) {
        self.visible_count = self.initial_visible;
    }
}
