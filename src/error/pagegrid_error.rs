//! Unified error type for the pagegrid library.

use std::fmt;

use super::category::ErrorCategory;
use super::grid::GridError;
use super::image::ImageError;

/// Unified error type for the pagegrid library.
///
/// Consolidates the domain-specific errors so hosts can classify and log
/// them uniformly.
#[derive(Debug)]
pub enum PageGridError {
    /// Paging grid errors.
    Grid(GridError),

    /// Image loading errors.
    Image(ImageError),

    /// Filesystem errors (configuration files).
    System(std::io::Error),
}

impl PageGridError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            PageGridError::Grid(err) => match err {
                GridError::InvalidRetryState { .. } => ErrorCategory::Client,
                GridError::PageLoadFailed { .. } => ErrorCategory::Server,
                GridError::InvalidConfig { .. } => ErrorCategory::Configuration,
            },
            PageGridError::Image(err) => {
                if err.is_network() {
                    ErrorCategory::Network
                } else {
                    ErrorCategory::Content
                }
            }
            PageGridError::System(_) => ErrorCategory::System,
        }
    }

    /// Whether offering the user a retry makes sense.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            PageGridError::Grid(err) => err.user_message(),
            PageGridError::Image(_) => "The image could not be loaded.".to_string(),
            PageGridError::System(err) => format!("A system error occurred: {}", err),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PageGridError::Grid(err) => err.error_code(),
            PageGridError::Image(err) => err.error_code(),
            PageGridError::System(_) => "SYS_IO",
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for PageGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageGridError::Grid(err) => write!(f, "{}", err),
            PageGridError::Image(err) => write!(f, "{}", err),
            PageGridError::System(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for PageGridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PageGridError::Grid(err) => Some(err),
            PageGridError::Image(err) => Some(err),
            PageGridError::System(err) => Some(err),
        }
    }
}

impl From<GridError> for PageGridError {
    fn from(err: GridError) -> Self {
        PageGridError::Grid(err)
    }
}

impl From<ImageError> for PageGridError {
    fn from(err: ImageError) -> Self {
        PageGridError::Image(err)
    }
}

impl From<std::io::Error> for PageGridError {
    fn from(err: std::io::Error) -> Self {
        PageGridError::System(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RetryState;
    use std::error::Error;

    #[test]
    fn test_grid_error_category() {
        let err: PageGridError = GridError::PageLoadFailed {
            message: "503".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Server);
        assert!(err.is_retryable());

        let err: PageGridError = GridError::InvalidRetryState {
            expected: RetryState::LabelAndButton,
            actual: RetryState::Loading,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Client);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_image_error_category() {
        let net: PageGridError = ImageError::HttpStatus {
            path: "a".to_string(),
            status: 404,
        }
        .into();
        assert_eq!(net.category(), ErrorCategory::Network);

        let decode: PageGridError = ImageError::DecodeFailed {
            path: "a".to_string(),
            message: "truncated".to_string(),
        }
        .into();
        assert_eq!(decode.category(), ErrorCategory::Content);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: PageGridError = io_err.into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.error_code(), "SYS_IO");
        assert!(err.source().is_some());
    }
}
