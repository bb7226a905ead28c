//! Fullscreen image gallery.
//!
//! Pages through a listing's images one at a time with a caption below and
//! a preview strip that can be toggled with a tap. The main pages and the
//! preview strip load through the same [`GalleryPager::load_image`], which
//! shares concurrent requests for one URL and caches the result.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use serde::{Deserialize, Serialize};

use crate::error::{ImageError, ImageResult};
use crate::images::{DecodedImage, ImageCache};
use crate::traits::ImageLoader;

type SharedLoad = Shared<BoxFuture<'static, ImageResult<Arc<DecodedImage>>>>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GalleryModel {
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub captions: Vec<String>,
}

/// Paging state and image access for the fullscreen gallery.
pub struct GalleryPager {
    model: GalleryModel,
    current: usize,
    preview_visible: bool,
    cache: ImageCache,
    loader: Arc<dyn ImageLoader>,
    in_flight: Mutex<HashMap<String, SharedLoad>>,
}

impl GalleryPager {
    /// Open the gallery at `initial_index`, clamped to the last image.
    pub fn new(
        model: GalleryModel,
        initial_index: usize,
        cache: ImageCache,
        loader: Arc<dyn ImageLoader>,
    ) -> Self {
        let current = initial_index.min(model.image_urls.len().saturating_sub(1));
        Self {
            model,
            current,
            preview_visible: true,
            cache,
            loader,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    pub fn model(&self) -> &GalleryModel {
        &self.model
    }

    pub fn len(&self) -> usize {
        self.model.image_urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.model.image_urls.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Page shown before `index`, if any.
    pub fn page_before(&self, index: usize) -> Option<usize> {
        index.checked_sub(1).filter(|i| *i < self.len())
    }

    /// Page shown after `index`, if any.
    pub fn page_after(&self, index: usize) -> Option<usize> {
        index.checked_add(1).filter(|i| *i < self.len())
    }

    /// Caption of image `index`; missing captions are `None`.
    pub fn caption(&self, index: usize) -> Option<&str> {
        self.model.captions.get(index).map(String::as_str)
    }

    /// A page transition landed on `index`. Returns the caption to show.
    pub fn finish_paging(&mut self, index: usize) -> Option<&str> {
        if index < self.len() {
            self.current = index;
        } else {
            tracing::warn!(index, len = self.len(), "Ignoring page transition out of range");
        }
        self.caption(self.current)
    }

    pub fn is_preview_visible(&self) -> bool {
        self.preview_visible
    }

    /// Show or hide the preview strip. Returns the new visibility.
    pub fn toggle_preview(&mut self) -> bool {
        self.preview_visible = !self.preview_visible;
        self.preview_visible
    }

    /// Load image `index` scaled for `width`.
    ///
    /// Cached images return immediately. Concurrent calls for the same URL
    /// and width share a single loader request.
    pub async fn load_image(&self, index: usize, width: f32) -> ImageResult<Arc<DecodedImage>> {
        let Some(url) = self.model.image_urls.get(index).cloned() else {
            return Err(ImageError::InvalidPath {
                path: format!("gallery image #{}", index),
            });
        };

        let key = ImageCache::key_for(&url, width);
        if let Some(image) = self.cache.get(&key) {
            return Ok(image);
        }

        let request = {
            let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
            in_flight
                .entry(key.clone())
                .or_insert_with(|| {
                    tracing::debug!(index, url = %url, width, "Loading gallery image");
                    let loader = Arc::clone(&self.loader);
                    async move { loader.load(&url, width).await }.boxed().shared()
                })
                .clone()
        };

        let result = request.await;

        self.in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&key);
        if let Ok(image) = &result {
            self.cache.put(key, Arc::clone(image));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockImageLoader;
    use std::time::Duration;

    fn model() -> GalleryModel {
        GalleryModel {
            image_urls: (0..4)
                .map(|i| format!("https://img.example.com/g/{}.jpg", i))
                .collect(),
            captions: vec!["Front".to_string(), "Kitchen".to_string()],
        }
    }

    fn pager(loader: MockImageLoader) -> GalleryPager {
        GalleryPager::new(model(), 0, ImageCache::new(), Arc::new(loader))
    }

    #[test]
    fn test_neighbours() {
        let pager = pager(MockImageLoader::new());
        assert_eq!(pager.page_before(0), None);
        assert_eq!(pager.page_before(2), Some(1));
        assert_eq!(pager.page_after(2), Some(3));
        assert_eq!(pager.page_after(3), None);
    }

    #[test]
    fn test_captions() {
        let mut pager = pager(MockImageLoader::new());
        assert_eq!(pager.caption(1), Some("Kitchen"));
        assert_eq!(pager.caption(3), None);

        assert_eq!(pager.finish_paging(1), Some("Kitchen"));
        assert_eq!(pager.current_index(), 1);

        // Out of range keeps the current page
        assert_eq!(pager.finish_paging(9), Some("Kitchen"));
        assert_eq!(pager.current_index(), 1);
    }

    #[test]
    fn test_initial_index_clamped() {
        let loader = Arc::new(MockImageLoader::new());
        let pager = GalleryPager::new(model(), 10, ImageCache::new(), loader);
        assert_eq!(pager.current_index(), 3);

        let loader = Arc::new(MockImageLoader::new());
        let empty = GalleryPager::new(GalleryModel::default(), 2, ImageCache::new(), loader);
        assert!(empty.is_empty());
        assert_eq!(empty.current_index(), 0);
    }

    #[test]
    fn test_toggle_preview() {
        let mut pager = pager(MockImageLoader::new());
        assert!(pager.is_preview_visible());
        assert!(!pager.toggle_preview());
        assert!(pager.toggle_preview());
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_loads_share_one_request() {
        let loader = MockImageLoader::new().with_delay(Duration::from_millis(100));
        let pager = pager(loader.clone());

        let (page, preview) = tokio::join!(pager.load_image(2, 320.0), pager.load_image(2, 320.0));
        assert!(page.is_ok());
        assert!(preview.is_ok());
        assert_eq!(loader.call_count(), 1);

        // Cached afterwards
        pager.load_image(2, 320.0).await.unwrap();
        assert_eq!(loader.call_count(), 1);
    }

    #[tokio::test]
    async fn test_each_width_is_loaded_and_cached_separately() {
        let loader = MockImageLoader::new();
        let pager = pager(loader.clone());

        let thumb = pager.load_image(0, 64.0).await.unwrap();
        let full = pager.load_image(0, 1024.0).await.unwrap();
        assert_eq!(thumb.width(), 64);
        assert_eq!(full.width(), 1024);
        assert_eq!(loader.call_count(), 2);

        let again = pager.load_image(0, 1024.0).await.unwrap();
        assert_eq!(again.width(), 1024);
        assert_eq!(loader.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let loader = MockImageLoader::new();
        loader.fail_path("https://img.example.com/g/1.jpg");
        let pager = pager(loader.clone());

        assert!(pager.load_image(1, 100.0).await.is_err());
        assert!(pager.load_image(1, 100.0).await.is_err());
        assert_eq!(loader.call_count(), 2);
    }

    #[tokio::test]
    async fn test_out_of_range_load() {
        let pager = pager(MockImageLoader::new());
        let err = pager.load_image(4, 100.0).await.unwrap_err();
        assert!(matches!(err, ImageError::InvalidPath { .. }));
    }
}
