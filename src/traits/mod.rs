//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`PagedItemSource`] - Host-owned item list consumed by the controllers
//! - [`GridDelegate`] / [`FolderListDelegate`] / [`TextFieldDelegate`] - Callbacks to the host
//! - [`ImageLoader`] - Fetch-and-decode of remote images
//! - [`HttpClient`] - HTTP GET used by the image loader

pub mod delegate;
pub mod http;
pub mod image_loader;
pub mod item_source;

pub use delegate::{FolderListDelegate, GridDelegate, TextFieldDelegate};
pub use http::{Headers, HttpClient, HttpError, Response};
pub use image_loader::ImageLoader;
pub use item_source::{PagedItemSource, RenderVariant};
