//! Mock item source for testing.

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::ImageResult;
use crate::images::DecodedImage;
use crate::traits::{ImageLoader, PagedItemSource, RenderVariant};

use super::image_loader::MockImageLoader;

/// Height of a banner cell, independent of width.
pub const BANNER_HEIGHT: f32 = 300.0;

/// A minimal listing model.
#[derive(Debug, Clone, PartialEq)]
pub struct MockItem {
    pub id: usize,
    pub title: String,
    pub image_path: Option<String>,
    pub is_favorite: bool,
    pub banner: bool,
}

impl MockItem {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            title: format!("Item {}", id),
            image_path: Some(format!("https://img.example.com/items/{}.jpg", id)),
            is_favorite: false,
            banner: false,
        }
    }

    pub fn banner(id: usize) -> Self {
        Self {
            title: "Sponsored".to_string(),
            image_path: None,
            banner: true,
            ..Self::new(id)
        }
    }
}

/// In-memory [`PagedItemSource`] over a `Vec<MockItem>`.
///
/// `item_at` panics on an out-of-range index, which the controllers must
/// never request.
pub struct MockItemSource {
    items: Vec<MockItem>,
    loader: Arc<dyn ImageLoader>,
}

impl MockItemSource {
    /// `count` standard items with ids `0..count`.
    pub fn new(count: usize) -> Self {
        Self::with_items((0..count).map(MockItem::new).collect())
    }

    pub fn with_items(items: Vec<MockItem>) -> Self {
        Self {
            items,
            loader: Arc::new(MockImageLoader::new()),
        }
    }

    pub fn with_loader(mut self, loader: Arc<dyn ImageLoader>) -> Self {
        self.loader = loader;
        self
    }

    pub fn items(&self) -> &[MockItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<MockItem> {
        &mut self.items
    }

    /// Append `count` more standard items.
    pub fn push_items(&mut self, count: usize) {
        let start = self.items.len();
        self.items.extend((start..start + count).map(MockItem::new));
    }
}

impl PagedItemSource for MockItemSource {
    type Item = MockItem;

    fn count(&self) -> usize {
        self.items.len()
    }

    fn item_at(&self, index: usize) -> MockItem {
        assert!(
            index < self.items.len(),
            "item index {} out of range ({} items)",
            index,
            self.items.len()
        );
        self.items[index].clone()
    }

    fn height_for(&self, item: &MockItem, width: f32) -> f32 {
        if item.banner {
            BANNER_HEIGHT
        } else {
            // Square photo plus the title row
            width + 48.0
        }
    }

    fn variant_for(&self, item: &MockItem) -> RenderVariant {
        if item.banner {
            RenderVariant::Banner
        } else {
            RenderVariant::Standard
        }
    }

    fn set_favorite(&mut self, index: usize, is_favorite: bool) {
        self.items[index].is_favorite = is_favorite;
    }

    fn image_path(&self, item: &MockItem) -> Option<String> {
        item.image_path.clone()
    }

    fn load_image(
        &self,
        path: &str,
        width: f32,
    ) -> BoxFuture<'static, ImageResult<Arc<DecodedImage>>> {
        let loader = Arc::clone(&self.loader);
        let path = path.to_string();
        async move { loader.load(&path, width).await }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_and_heights() {
        let source = MockItemSource::with_items(vec![MockItem::new(0), MockItem::banner(1)]);
        let standard = source.item_at(0);
        let banner = source.item_at(1);

        assert_eq!(source.variant_for(&standard), RenderVariant::Standard);
        assert_eq!(source.variant_for(&banner), RenderVariant::Banner);
        assert_eq!(source.height_for(&banner, 160.0), BANNER_HEIGHT);
        assert_eq!(source.height_for(&standard, 160.0), 208.0);
        assert!(source.image_path(&banner).is_none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_item_at_out_of_range_panics() {
        MockItemSource::new(3).item_at(3);
    }

    #[test]
    fn test_push_items_continues_ids() {
        let mut source = MockItemSource::new(2);
        source.push_items(2);
        assert_eq!(source.count(), 4);
        assert_eq!(source.items()[3].id, 3);
    }
}
