//! Image caching and per-cell image loading.
//!
//! - [`ImageCache`] - Shared, key-addressed cache of decoded images
//! - [`DecodedImage`] - Decoded image plus the key it came from
//! - [`CellSlots`] - Slot bindings with cancellable, ticketed image loads

pub mod cache;
pub mod decoded;
pub mod slots;

pub use cache::ImageCache;
pub use decoded::DecodedImage;
pub use slots::{CellSlots, ImageLoaded, SlotId, SlotImage};
