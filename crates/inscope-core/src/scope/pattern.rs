//! Compiled scope patterns

use crate::error::{Error, Result};
use regex::Regex;

/// Marker prefix for exclusion patterns
const NEGATION_PREFIX: char = '!';

/// A compiled scope pattern
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    negated: bool,
}

impl Pattern {
    /// Parse one scope file line
    ///
    /// Returns `Ok(None)` for blank lines. The line is trimmed and a single
    /// leading `!` marks an exclusion; the remainder is compiled as-is.
    /// `line_no` is only used for error reporting.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (source, negated) = match line.strip_prefix(NEGATION_PREFIX) {
            Some(rest) => (rest, true),
            None => (line, false),
        };

        let regex = Regex::new(source).map_err(|e| Error::scope_parse(line_no, source, e))?;
        Ok(Some(Self { regex, negated }))
    }

    /// Whether this is an exclusion pattern
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Source text of the regular expression
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Check the pattern against a domain or hostname (unanchored search)
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "{}{}", NEGATION_PREFIX, self.regex.as_str())
        } else {
            f.write_str(self.regex.as_str())
        }
    }
}
