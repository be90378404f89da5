//! Error types for inscope-core
//!
//! Centralized error handling using `thiserror` for ergonomic error definitions.

use thiserror::Error;

/// Main error type for inscope-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Scope file could not be opened
    #[error("unable to find SCOPE file in {path}")]
    ScopeFileNotFound {
        /// Path that was looked up
        path: String,
    },

    /// A scope file line is not a valid regular expression
    #[error("invalid pattern on line {line} ({pattern:?}): {source}")]
    ScopeParse {
        /// 1-based line number in the scope file
        line: usize,
        /// Pattern text after the `!` marker was stripped
        pattern: String,
        /// Underlying compile error
        #[source]
        source: regex::Error,
    },

    /// URL-shaped input failed structural parsing
    #[error("URL parsing error for '{input}': {source}")]
    UrlParse {
        /// The offending input
        input: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a scope parse error
    pub fn scope_parse(line: usize, pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::ScopeParse {
            line,
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a URL parse error
    pub fn url_parse(input: impl Into<String>, source: url::ParseError) -> Self {
        Self::UrlParse {
            input: input.into(),
            source,
        }
    }
}
