//! Error handling for pagegrid.
//!
//! - **Error Categories**: classification for logging and messaging
//! - **Domain-specific Errors**: grid state/config errors and image errors
//! - **Unified Error Type**: `PageGridError` consolidates them
//! - **Result Type Aliases**: `PageGridResult<T>` and `ImageResult<T>`
//!
//! | Category | Source | Offer retry |
//! |----------|--------|-------------|
//! | Network | image fetch, HTTP status | Yes |
//! | Server | page load failure | Yes |
//! | Client | invalid retry transition | No |
//! | Content | image decode | No |
//! | System | filesystem | No |
//! | Configuration | paging constants | No |
//!
//! Retries are always user-initiated through the grid's retry view.

mod category;
mod grid;
mod image;
mod pagegrid_error;
mod result;

pub use category::ErrorCategory;
pub use grid::GridError;
pub use image::ImageError;
pub use pagegrid_error::PageGridError;
pub use result::{ImageResult, PageGridResult};
