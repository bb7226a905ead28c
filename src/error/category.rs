//! Error category classification for unified error handling.
//!
//! Categories only classify errors for logging and messaging. Nothing in
//! this crate retries automatically; every recovery path is user-initiated.

use std::fmt;

/// High-level categorization of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (connection, DNS, timeout, HTTP status).
    Network,

    /// Backend could not produce a page of items.
    Server,

    /// Programming errors in the host (invalid state transitions).
    Client,

    /// Payload could not be interpreted (image decode failures).
    Content,

    /// System/OS errors (filesystem, permissions).
    System,

    /// Configuration errors (invalid paging constants, unreadable files).
    Configuration,
}

impl ErrorCategory {
    /// Returns true if the user may sensibly trigger a retry for this category.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Content => "content",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Network connectivity issue",
            ErrorCategory::Server => "Server-side issue",
            ErrorCategory::Client => "Application error",
            ErrorCategory::Content => "Unreadable content",
            ErrorCategory::System => "System error",
            ErrorCategory::Configuration => "Configuration problem",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and tap retry",
            ErrorCategory::Server => "The server may be experiencing issues. Tap retry later",
            ErrorCategory::Client => "This may be a bug. Please report this issue if it persists",
            ErrorCategory::Content => "The image could not be shown",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Check your configuration settings",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
