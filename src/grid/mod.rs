//! Lazily paged item grid.
//!
//! - [`GridController`] - Page window, retry and refresh state for one surface
//! - [`GridConfig`] - Paging constants
//! - [`GridSignal`] / [`GridMessage`] - Output to the surface and input from timers

pub mod config;
pub mod controller;
pub mod signals;

pub use config::{ConfigError, GridConfig};
pub use controller::GridController;
pub use signals::{GridMessage, GridSignal, PagingOutcome};
