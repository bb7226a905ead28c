//! Grid controller error types.

use std::fmt;

use crate::domain::RetryState;

/// Errors raised by the paging grid and its configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A retry was requested while the retry view was not offering one.
    InvalidRetryState {
        expected: RetryState,
        actual: RetryState,
    },

    /// The host's item source could not produce a page.
    PageLoadFailed { message: String },

    /// Paging constants are unusable.
    InvalidConfig { field: &'static str, message: String },
}

impl GridError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            GridError::InvalidRetryState { .. } => {
                "Nothing to retry right now.".to_string()
            }
            GridError::PageLoadFailed { .. } => {
                "We could not load your recommendations.".to_string()
            }
            GridError::InvalidConfig { field, .. } => {
                format!("Invalid grid setting '{}'.", field)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            GridError::InvalidRetryState { .. } => "GRID_INVALID_RETRY_STATE",
            GridError::PageLoadFailed { .. } => "GRID_PAGE_LOAD_FAILED",
            GridError::InvalidConfig { .. } => "GRID_INVALID_CONFIG",
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidRetryState { expected, actual } => write!(
                f,
                "Invalid retry state: expected {:?}, was {:?}",
                expected, actual
            ),
            GridError::PageLoadFailed { message } => write!(f, "Page load failed: {}", message),
            GridError::InvalidConfig { field, message } => {
                write!(f, "Invalid grid config '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for GridError {}
