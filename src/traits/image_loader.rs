//! Image loader trait abstraction.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ImageResult;
use crate::images::DecodedImage;

/// Fetch-and-decode capability for remote images.
///
/// Item sources typically hold an `Arc<dyn ImageLoader>` and forward
/// `PagedItemSource::load_image` to it.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    /// Load the image at `path`, scaled down to at most `width` pixels wide.
    async fn load(&self, path: &str, width: f32) -> ImageResult<Arc<DecodedImage>>;
}
