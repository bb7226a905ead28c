//! Retry view state.

use serde::{Deserialize, Serialize};

/// State of the "could not load, try again" view shown over the grid.
///
/// `Hidden` -> `LabelAndButton` on a page load failure, `LabelAndButton` ->
/// `Loading` when the user taps retry, and back to `Hidden` on reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryState {
    #[default]
    Hidden,
    Loading,
    LabelAndButton,
}

impl RetryState {
    /// Paging is frozen whenever the retry view is showing anything.
    pub fn blocks_paging(&self) -> bool {
        !matches!(self, RetryState::Hidden)
    }

    /// Only the label-and-button state offers a retry action.
    pub fn can_retry(&self) -> bool {
        matches!(self, RetryState::LabelAndButton)
    }
}
