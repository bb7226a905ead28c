//! Mock image loader for testing.

use std::collections::HashSet;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use image::{ImageFormat, RgbaImage};

use crate::error::{ImageError, ImageResult};
use crate::images::DecodedImage;
use crate::traits::ImageLoader;

/// Encode a solid RGBA image of the given size as PNG bytes.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, image::Rgba([200, 80, 40, 255]));
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .expect("encoding an in-memory PNG cannot fail");
    out.into_inner()
}

/// Image loader that returns blank images and records every call.
///
/// Paths registered with [`MockImageLoader::fail_path`] fail with
/// `ImageError::HttpStatus { status: 404 }`.
#[derive(Debug, Clone, Default)]
pub struct MockImageLoader {
    delay: Option<Duration>,
    failing: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<(String, f32)>>>,
}

impl MockImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep for `delay` before every load completes.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fail_path(&self, path: &str) {
        self.failing.lock().unwrap().insert(path.to_string());
    }

    /// Every `(path, width)` requested so far, in order.
    pub fn calls(&self) -> Vec<(String, f32)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageLoader for MockImageLoader {
    async fn load(&self, path: &str, width: f32) -> ImageResult<Arc<DecodedImage>> {
        self.calls.lock().unwrap().push((path.to_string(), width));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.lock().unwrap().contains(path) {
            return Err(ImageError::HttpStatus {
                path: path.to_string(),
                status: 404,
            });
        }

        let side = width.max(1.0) as u32;
        Ok(Arc::new(DecodedImage::blank(path, side, side)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_bytes_decode() {
        let bytes = png_bytes(3, 2);
        let image = image::load_from_memory(&bytes).unwrap();
        assert_eq!((image.width(), image.height()), (3, 2));
    }

    #[tokio::test]
    async fn test_records_calls_and_failures() {
        let loader = MockImageLoader::new();
        loader.fail_path("bad.jpg");

        assert!(loader.load("good.jpg", 16.0).await.is_ok());
        assert!(loader.load("bad.jpg", 16.0).await.is_err());
        assert_eq!(loader.call_count(), 2);
        assert_eq!(loader.calls()[0].0, "good.jpg");
    }
}
