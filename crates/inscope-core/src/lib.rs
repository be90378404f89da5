//! # inscope core
//!
//! Scope filtering for reconnaissance workflows.
//!
//! ## Architecture
//!
//! This crate provides:
//! - **Scope loading** - `scope.txt` parsing into inclusion and exclusion regexes
//! - **Scope checking** - per-item decision with URL hostname extraction
//! - **Pipeline** - streaming line-by-line filtering with statistics
//!
//! ## Example
//!
//! ```rust,no_run
//! use inscope_core::{ScopeChecker, ScopeConfig};
//!
//! let config = ScopeConfig::default();
//! let checker = ScopeChecker::from_file(config.scope_file())?;
//!
//! if checker.in_scope("https://api.example.com/v1") {
//!     println!("in scope");
//! }
//! # Ok::<(), inscope_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod scope;

// Re-exports for convenience
pub use config::{ScopeConfig, SCOPE_FILE_NAME};
pub use error::{Error, Result};
pub use pipeline::{filter_lines, Stats};
pub use scope::{Pattern, ScopeChecker, Verdict};
