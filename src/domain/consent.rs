//! Consent overlay state.

use serde::{Deserialize, Serialize};

/// Visibility of the inline consent dialogue.
///
/// Changes only through explicit `show`/`hide` calls, never on a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentState {
    #[default]
    Hidden,
    Visible,
}

impl ConsentState {
    pub fn is_visible(&self) -> bool {
        matches!(self, ConsentState::Visible)
    }
}
