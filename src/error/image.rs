//! Image loading error types.
//!
//! Image failures are recovered locally: the cell keeps its placeholder and
//! the cache is left untouched. They are never shown to the user.

use std::fmt;

/// Image load or decode failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The image path could not be turned into a request.
    InvalidPath { path: String },

    /// The request never produced a response.
    FetchFailed { path: String, message: String },

    /// The server answered with a non-success status.
    HttpStatus { path: String, status: u16 },

    /// The payload was not a decodable image.
    DecodeFailed { path: String, message: String },

    /// The load was cancelled before completing.
    Cancelled { path: String },
}

impl ImageError {
    /// The path the failed request was issued for.
    pub fn path(&self) -> &str {
        match self {
            ImageError::InvalidPath { path }
            | ImageError::FetchFailed { path, .. }
            | ImageError::HttpStatus { path, .. }
            | ImageError::DecodeFailed { path, .. }
            | ImageError::Cancelled { path } => path,
        }
    }

    /// Whether this failure came from the transport rather than the payload.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ImageError::FetchFailed { .. } | ImageError::HttpStatus { .. }
        )
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ImageError::InvalidPath { .. } => "IMG_INVALID_PATH",
            ImageError::FetchFailed { .. } => "IMG_FETCH_FAILED",
            ImageError::HttpStatus { .. } => "IMG_HTTP_STATUS",
            ImageError::DecodeFailed { .. } => "IMG_DECODE_FAILED",
            ImageError::Cancelled { .. } => "IMG_CANCELLED",
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::InvalidPath { path } => write!(f, "Invalid image path: {}", path),
            ImageError::FetchFailed { path, message } => {
                write!(f, "Failed to fetch image {}: {}", path, message)
            }
            ImageError::HttpStatus { path, status } => {
                write!(f, "Image request {} returned status {}", path, status)
            }
            ImageError::DecodeFailed { path, message } => {
                write!(f, "Failed to decode image {}: {}", path, message)
            }
            ImageError::Cancelled { path } => write!(f, "Image load cancelled: {}", path),
        }
    }
}

impl std::error::Error for ImageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_accessor() {
        let err = ImageError::HttpStatus {
            path: "https://images.example.com/1.jpg".to_string(),
            status: 404,
        };
        assert_eq!(err.path(), "https://images.example.com/1.jpg");
    }

    #[test]
    fn test_is_network() {
        assert!(ImageError::FetchFailed {
            path: "a".to_string(),
            message: "refused".to_string(),
        }
        .is_network());
        assert!(!ImageError::DecodeFailed {
            path: "a".to_string(),
            message: "bad magic".to_string(),
        }
        .is_network());
    }

    #[test]
    fn test_display() {
        let err = ImageError::HttpStatus {
            path: "a.png".to_string(),
            status: 500,
        };
        assert_eq!(err.to_string(), "Image request a.png returned status 500");
    }
}
