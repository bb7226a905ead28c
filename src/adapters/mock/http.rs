//! Mock image CDN for testing.
//!
//! Serves in-memory PNGs, bare status codes or transport errors per URL.
//! Unknown URLs answer 404, like a CDN with a missing object.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::image_loader::png_bytes;
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A request seen by [`MockHttpClient`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

#[derive(Debug, Clone)]
enum Route {
    Respond(Response),
    Fail(HttpError),
}

/// In-memory HTTP client answering image requests by exact URL.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.serve_png("https://img.example.com/1.png", 300, 150);
///
/// let loader = HttpImageLoader::new(client.clone());
/// let image = loader.load("https://img.example.com/1.png", 100.0).await?;
/// assert_eq!(image.height(), 50);
/// assert_eq!(client.requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    routes: Arc<Mutex<HashMap<String, Route>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a `width` x `height` PNG at `url`.
    pub fn serve_png(&self, url: &str, width: u32, height: u32) {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "image/png".to_string());
        let body = Bytes::from(png_bytes(width, height));
        self.route(url, Route::Respond(Response::with_headers(200, headers, body)));
    }

    /// Answer `url` with an empty body and `status`.
    pub fn serve_status(&self, url: &str, status: u16) {
        self.route(url, Route::Respond(Response::new(status, Bytes::new())));
    }

    /// Fail requests for `url` before any response arrives.
    pub fn fail(&self, url: &str, error: HttpError) {
        self.route(url, Route::Fail(error));
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn route(&self, url: &str, route: Route) {
        self.routes.lock().unwrap().insert(url.to_string(), route);
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });

        match self.routes.lock().unwrap().get(url).cloned() {
            Some(Route::Respond(response)) => Ok(response),
            Some(Route::Fail(err)) => Err(err),
            None => Ok(Response::new(404, Bytes::new())),
        }
    }
}
