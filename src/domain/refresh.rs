//! Pull-to-refresh state.

/// Pull-to-refresh indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshState {
    /// Whether the surface offers pull-to-refresh at all
    pub enabled: bool,
    /// Whether the refresh indicator is currently spinning
    pub refreshing: bool,
}

impl RefreshState {
    /// Start refreshing if allowed. Returns true if the indicator started.
    pub fn begin(&mut self) -> bool {
        if !self.enabled || self.refreshing {
            return false;
        }
        self.refreshing = true;
        true
    }

    /// Stop the indicator. Returns true if it was spinning.
    pub fn end(&mut self) -> bool {
        std::mem::replace(&mut self.refreshing, false)
    }
}
