//! Item source trait consumed by the list and grid controllers.

use std::sync::Arc;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::error::ImageResult;
use crate::images::DecodedImage;

/// Which cell layout an item renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderVariant {
    /// Regular item cell (image, title, favourite button)
    #[default]
    Standard,
    /// Third-party banner cell with a fixed height
    Banner,
}

/// The host's view of "how many items exist" and "the model for index i".
///
/// Controllers only ever call `item_at` and `height_for` with indices below
/// the effective visible count, which never exceeds `count()`. A source may
/// therefore treat an out-of-range index as a bug and panic.
pub trait PagedItemSource {
    /// Opaque host model.
    type Item: Clone;

    /// Number of items currently available.
    fn count(&self) -> usize;

    /// Model at `index`.
    fn item_at(&self, index: usize) -> Self::Item;

    /// Cell height for `item` when laid out at `width`.
    fn height_for(&self, item: &Self::Item, width: f32) -> f32;

    /// Cell layout for `item`.
    fn variant_for(&self, _item: &Self::Item) -> RenderVariant {
        RenderVariant::Standard
    }

    /// Record a favourite toggle confirmed by the host.
    fn set_favorite(&mut self, _index: usize, _is_favorite: bool) {}

    /// Remote image path used as the cache key, if the item has an image.
    fn image_path(&self, item: &Self::Item) -> Option<String>;

    /// Start loading the image at `path` scaled for `width`.
    ///
    /// The returned future is spawned on the runtime and aborted when its
    /// cell is reused, so it must own everything it needs.
    fn load_image(
        &self,
        path: &str,
        width: f32,
    ) -> BoxFuture<'static, ImageResult<Arc<DecodedImage>>>;
}
