//! Decoded image value shared between the cache and cells.

use image::DynamicImage;

/// A decoded image together with the key it was loaded from.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    key: String,
    image: DynamicImage,
}

impl DecodedImage {
    pub fn new(key: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            key: key.into(),
            image,
        }
    }

    /// A blank RGBA image, used by mocks and the demo harness.
    pub fn blank(key: impl Into<String>, width: u32, height: u32) -> Self {
        Self::new(key, DynamicImage::new_rgba8(width, height))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}
