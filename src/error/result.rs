//! Result type aliases for pagegrid operations.

use super::image::ImageError;
use super::pagegrid_error::PageGridError;

/// Type alias for Results using PageGridError.
pub type PageGridResult<T> = Result<T, PageGridError>;

/// Type alias for image load results.
pub type ImageResult<T> = Result<T, ImageError>;
