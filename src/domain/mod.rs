//! Domain state objects for the paging grid.
//!
//! Small, self-contained state types the controllers compose.
//!
//! ## Domain Objects
//!
//! - [`PageWindow`] - Materialized prefix of the item list
//! - [`RetryState`] - Retry view state
//! - [`ConsentState`] - Consent overlay visibility
//! - [`RefreshState`] - Pull-to-refresh indicator

pub mod consent;
pub mod page_window;
pub mod refresh;
pub mod retry;

pub use consent::ConsentState;
pub use page_window::PageWindow;
pub use refresh::RefreshState;
pub use retry::RetryState;
