//! Prelude module for convenient imports.
//!
//! ```ignore
//! use pagegrid::prelude::*;
//! ```

// Controllers
pub use crate::consent::{ConsentOverlayController, OverlayTarget};
pub use crate::folders::{FolderListController, Section};
pub use crate::gallery::{GalleryModel, GalleryPager};
pub use crate::grid::{GridConfig, GridController, GridMessage, GridSignal, PagingOutcome};
pub use crate::recommendations::{RecommendationsModel, RecommendationsScreen};
pub use crate::text_field::{InputType, TextFieldController};

// State
pub use crate::domain::{ConsentState, PageWindow, RetryState};

// Images
pub use crate::images::{DecodedImage, ImageCache, SlotId, SlotImage};

// Errors
pub use crate::error::{ImageError, PageGridError, PageGridResult};

// Seams
pub use crate::traits::{
    FolderListDelegate, GridDelegate, ImageLoader, PagedItemSource, TextFieldDelegate,
};
