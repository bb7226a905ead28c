//! Cell slot bindings with cancellable image loads.
//!
//! The rendering surface reuses a small number of visual cells ("slots")
//! for many item indices. Every image request issued for a slot carries a
//! ticket; a completion is applied only if its ticket is still the slot's
//! current one, so a reused cell never shows an image meant for the item it
//! displayed before.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::task::JoinHandle;

use super::cache::ImageCache;
use super::decoded::DecodedImage;
use crate::error::ImageResult;

/// Identifier of a reusable visual cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub usize);

/// Completion of an image request, delivered back to the event loop.
#[derive(Debug)]
pub struct ImageLoaded {
    pub slot: SlotId,
    pub ticket: u64,
    pub key: String,
    pub result: ImageResult<Arc<DecodedImage>>,
}

/// What a freshly bound slot should display.
#[derive(Debug, Clone)]
pub enum SlotImage {
    /// Cached image, show it immediately
    Ready(Arc<DecodedImage>),
    /// A load is in flight, show the placeholder until it lands
    Loading,
    /// Nothing will arrive, keep the placeholder
    Placeholder,
}

impl SlotImage {
    pub fn image(&self) -> Option<&Arc<DecodedImage>> {
        match self {
            SlotImage::Ready(image) => Some(image),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SlotImage::Loading)
    }
}

#[derive(Debug)]
struct Binding {
    index: usize,
    ticket: u64,
    image: Option<Arc<DecodedImage>>,
    task: Option<JoinHandle<()>>,
}

/// Slot bindings for one rendering surface.
#[derive(Debug)]
pub struct CellSlots {
    cache: ImageCache,
    bindings: HashMap<SlotId, Binding>,
    next_ticket: u64,
}

impl CellSlots {
    pub fn new(cache: ImageCache) -> Self {
        Self {
            cache,
            bindings: HashMap::new(),
            next_ticket: 0,
        }
    }

    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    /// Bind `slot` to `index`, cancelling whatever the slot was loading.
    ///
    /// `path` is looked up in the cache at `width`; `load` is only called
    /// with it on a cache miss. `deliver` runs on the loading
    /// task and must hand the completion back to the event loop, which then
    /// passes it to [`CellSlots::apply`].
    pub fn bind<L, D>(
        &mut self,
        slot: SlotId,
        index: usize,
        path: Option<String>,
        width: f32,
        load: L,
        deliver: D,
    ) -> SlotImage
    where
        L: FnOnce(&str) -> BoxFuture<'static, ImageResult<Arc<DecodedImage>>>,
        D: FnOnce(ImageLoaded) + Send + 'static,
    {
        self.release(slot);

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let mut binding = Binding {
            index,
            ticket,
            image: None,
            task: None,
        };

        let Some(path) = path else {
            self.bindings.insert(slot, binding);
            return SlotImage::Placeholder;
        };
        let key = ImageCache::key_for(&path, width);

        if let Some(image) = self.cache.get(&key) {
            binding.image = Some(Arc::clone(&image));
            self.bindings.insert(slot, binding);
            return SlotImage::Ready(image);
        }

        // Guard: only spawn if a tokio runtime is available
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(slot = slot.0, index, "No async runtime, leaving placeholder");
            self.bindings.insert(slot, binding);
            return SlotImage::Placeholder;
        };

        let request = load(&path);
        binding.task = Some(runtime.spawn(async move {
            let result = request.await;
            deliver(ImageLoaded {
                slot,
                ticket,
                key,
                result,
            });
        }));
        self.bindings.insert(slot, binding);
        SlotImage::Loading
    }

    /// Detach a slot, aborting its in-flight load. Returns true if it was bound.
    pub fn release(&mut self, slot: SlotId) -> bool {
        match self.bindings.remove(&slot) {
            Some(binding) => {
                if let Some(task) = binding.task {
                    task.abort();
                    tracing::trace!(slot = slot.0, index = binding.index, "Cancelled image load");
                }
                true
            }
            None => false,
        }
    }

    /// Apply a completed load. Returns the item index if the slot took it.
    ///
    /// Successful results are cached even when stale, since the cache is keyed
    /// by path and width rather than by slot. Failures are dropped and leave the cache untouched.
    pub fn apply(&mut self, loaded: ImageLoaded) -> Option<usize> {
        let ImageLoaded {
            slot,
            ticket,
            key,
            result,
        } = loaded;

        let image = match result {
            Ok(image) => {
                self.cache.put(key, Arc::clone(&image));
                Some(image)
            }
            Err(err) => {
                tracing::debug!(
                    slot = slot.0,
                    code = err.error_code(),
                    "Image load failed, keeping placeholder: {}",
                    err
                );
                None
            }
        };

        let binding = match self.bindings.get_mut(&slot) {
            Some(binding) if binding.ticket == ticket => binding,
            _ => {
                tracing::trace!(slot = slot.0, ticket, "Discarding stale image result");
                return None;
            }
        };

        binding.task = None;
        let image = image?;
        binding.image = Some(image);
        Some(binding.index)
    }

    pub fn image(&self, slot: SlotId) -> Option<Arc<DecodedImage>> {
        self.bindings.get(&slot).and_then(|b| b.image.clone())
    }

    pub fn index_of(&self, slot: SlotId) -> Option<usize> {
        self.bindings.get(&slot).map(|b| b.index)
    }

    pub fn is_loading(&self, slot: SlotId) -> bool {
        self.bindings
            .get(&slot)
            .map(|b| b.task.is_some())
            .unwrap_or(false)
    }

    pub fn bound_count(&self) -> usize {
        self.bindings.len()
    }

    /// Detach every slot.
    pub fn clear(&mut self) {
        let slots: Vec<SlotId> = self.bindings.keys().copied().collect();
        for slot in slots {
            self.release(slot);
        }
    }
}

impl Drop for CellSlots {
    fn drop(&mut self) {
        self.clear();
    }
}
