//! HTTP image loader adapter.
//!
//! Fetches image bytes through an [`HttpClient`], decodes them with the
//! `image` crate and scales them down to the requested cell width.

use std::sync::Arc;

use async_trait::async_trait;
use image::imageops::FilterType;

use crate::error::{ImageError, ImageResult};
use crate::images::DecodedImage;
use crate::traits::{Headers, HttpClient, HttpError, ImageLoader};

/// [`ImageLoader`] backed by an [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpImageLoader<C> {
    client: Arc<C>,
    headers: Headers,
}

impl<C: HttpClient> HttpImageLoader<C> {
    pub fn new(client: C) -> Self {
        Self::with_shared_client(Arc::new(client))
    }

    pub fn with_shared_client(client: Arc<C>) -> Self {
        Self {
            client,
            headers: Headers::new(),
        }
    }

    /// Add a header sent with every image request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    fn fetch_error(path: &str, err: HttpError) -> ImageError {
        match err {
            HttpError::InvalidUrl(_) => ImageError::InvalidPath {
                path: path.to_string(),
            },
            HttpError::Cancelled => ImageError::Cancelled {
                path: path.to_string(),
            },
            other => ImageError::FetchFailed {
                path: path.to_string(),
                message: other.to_string(),
            },
        }
    }
}

/// Decode `bytes` and scale to at most `width` pixels wide, keeping aspect.
pub fn decode_scaled(path: &str, bytes: &[u8], width: f32) -> ImageResult<DecodedImage> {
    let image = image::load_from_memory(bytes).map_err(|e| ImageError::DecodeFailed {
        path: path.to_string(),
        message: e.to_string(),
    })?;

    let target = width.round().max(1.0) as u32;
    let image = if width.is_finite() && image.width() > target {
        image.resize(target, u32::MAX, FilterType::Triangle)
    } else {
        image
    };

    Ok(DecodedImage::new(path, image))
}

#[async_trait]
impl<C: HttpClient + 'static> ImageLoader for HttpImageLoader<C> {
    async fn load(&self, path: &str, width: f32) -> ImageResult<Arc<DecodedImage>> {
        if path.trim().is_empty() {
            return Err(ImageError::InvalidPath {
                path: path.to_string(),
            });
        }

        let response = self
            .client
            .get(path, &self.headers)
            .await
            .map_err(|e| Self::fetch_error(path, e))?;

        if !response.is_success() {
            return Err(ImageError::HttpStatus {
                path: path.to_string(),
                status: response.status,
            });
        }

        let decoded = decode_scaled(path, &response.body, width)?;
        tracing::debug!(
            path,
            width = decoded.width(),
            height = decoded.height(),
            "Decoded remote image"
        );
        Ok(Arc::new(decoded))
    }
}
