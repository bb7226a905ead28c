//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions,
//! enabling unit testing without network access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - In-memory image CDN
//! - [`MockImageLoader`] - Image loader returning blank images
//! - [`MockItemSource`] - In-memory item list
//! - [`RecordingDelegate`] - Grid, folder-list and text-field delegate recording callbacks

pub mod delegate;
pub mod http;
pub mod image_loader;
pub mod item_source;

pub use delegate::{DelegateEvent, RecordingDelegate};
pub use http::{MockHttpClient, RecordedRequest};
pub use image_loader::{png_bytes, MockImageLoader};
pub use item_source::{MockItem, MockItemSource, BANNER_HEIGHT};
