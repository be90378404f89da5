//! Scope definition and checking
//!
//! A scope file holds one regular expression per line:
//! - Empty lines are ignored
//! - Lines starting with `!` are exclusion patterns (the `!` is stripped)
//! - Every other line is an inclusion pattern
//!
//! A domain is in scope when it matches at least one inclusion pattern and
//! no exclusion pattern. URL-shaped input is reduced to its hostname first.

mod checker;
mod hostname;
mod loader;
mod pattern;

pub use checker::{ScopeChecker, Verdict};
pub use hostname::{extract_hostname, is_url};
pub use pattern::Pattern;
