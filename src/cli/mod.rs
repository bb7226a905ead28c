//! CLI module for the demo harness.
//!
//! ```ignore
//! use pagegrid::cli::{parse_args, DemoCommand};
//!
//! match parse_args(std::env::args()) {
//!     DemoCommand::Version => println!("pagegrid {}", pagegrid::cli::VERSION),
//!     other => run_demo(other).await?,
//! }
//! ```

pub mod args;

pub use args::{parse_args, DemoCommand};

/// Crate version, as printed by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
