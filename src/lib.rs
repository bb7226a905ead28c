//! pagegrid - headless controllers for paged, image-heavy list screens
//!
//! The rendering surface lives outside the crate. Controllers take the
//! surface's reports (which item is about to show, taps, scrolls), decide
//! what to load and when, and answer with signals describing what to redraw.
//!
//! - [`grid`] - Lazily paged grid with retry, refresh and consent gating
//! - [`recommendations`] - Recommendations screen composing grid and consent overlay
//! - [`folders`] - Searchable favourite-folder list with collapsing footer
//! - [`gallery`] - Fullscreen gallery pager
//! - [`images`] - Shared image cache and per-cell loading
//! - [`text_field`] - Form text field with email/password validation

pub mod adapters;
pub mod cli;
pub mod consent;
pub mod debounce;
pub mod demo;
pub mod domain;
pub mod error;
pub mod folders;
pub mod gallery;
pub mod grid;
pub mod images;
pub mod prelude;
pub mod recommendations;
pub mod text_field;
pub mod traits;
