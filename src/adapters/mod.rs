//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`HttpImageLoader`] - Fetch-and-decode through an [`HttpClient`](crate::traits::HttpClient)
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - In-memory image CDN
//! - [`mock::MockImageLoader`] - Recorded, optionally failing image loads
//! - [`mock::MockItemSource`] - In-memory item list
//! - [`mock::RecordingDelegate`] - Delegate callback recorder

pub mod http_image_loader;
pub mod mock;
pub mod reqwest_http;

pub use http_image_loader::{decode_scaled, HttpImageLoader};
pub use mock::{MockHttpClient, MockImageLoader, MockItemSource, RecordingDelegate};
pub use reqwest_http::ReqwestHttpClient;
