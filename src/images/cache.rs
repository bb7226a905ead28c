//! In-memory cache of decoded images.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::decoded::DecodedImage;

/// Key-addressed cache of decoded images.
///
/// Images are stored already scaled, so keys built with
/// [`ImageCache::key_for`] carry the width along with the path.
/// Cloning the cache shares the underlying map, so one instance can be
/// injected into every controller of a host screen. Entries are never
/// evicted; the cache lives exactly as long as its last clone.
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    entries: Arc<RwLock<HashMap<String, Arc<DecodedImage>>>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key for `path` scaled to `width`, rounded to whole pixels.
    pub fn key_for(path: &str, width: f32) -> String {
        format!("{}#{}w", path, width.max(0.0).round() as u32)
    }

    /// Look up an image by key.
    pub fn get(&self, key: &str) -> Option<Arc<DecodedImage>> {
        self.read().get(key).cloned()
    }

    /// Store an image under `key`. A later put for the same key replaces it.
    pub fn put(&self, key: impl Into<String>, image: Arc<DecodedImage>) {
        let key = key.into();
        tracing::trace!(key = %key, "Caching decoded image");
        self.write().insert(key, image);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.write().clear();
    }

    // A panic while holding the lock cannot leave the map half-written,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<DecodedImage>>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<DecodedImage>>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}
