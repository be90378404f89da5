//! Scope checking
//!
//! Provides the inclusion/exclusion decision for a single domain or URL.

use super::hostname::{extract_hostname, is_url};
use super::pattern::Pattern;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Outcome of classifying one input item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Matches an inclusion pattern and no exclusion pattern
    InScope,
    /// Matches no inclusion pattern, or matches an exclusion pattern
    OutOfScope,
    /// Looks like a URL but could not be parsed; treated as out of scope
    InvalidUrl,
}

impl Verdict {
    /// Whether this verdict counts as in scope
    pub fn is_in_scope(self) -> bool {
        self == Verdict::InScope
    }
}

/// Immutable set of inclusion and exclusion patterns
#[derive(Debug, Clone, Default)]
pub struct ScopeChecker {
    /// Inclusion patterns in file order
    patterns: Vec<Pattern>,
    /// Exclusion patterns in file order
    antipatterns: Vec<Pattern>,
}

impl ScopeChecker {
    /// Build a checker from compiled patterns, keeping their relative order
    pub fn from_patterns<I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = Pattern>,
    {
        let (antipatterns, patterns): (Vec<Pattern>, Vec<Pattern>) =
            patterns.into_iter().partition(Pattern::is_negated);
        Self {
            patterns,
            antipatterns,
        }
    }

    /// Inclusion patterns
    pub fn inclusions(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Exclusion patterns
    pub fn exclusions(&self) -> &[Pattern] {
        &self.antipatterns
    }

    /// Total number of patterns
    pub fn len(&self) -> usize {
        self.patterns.len() + self.antipatterns.len()
    }

    /// Check if no patterns are loaded
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty() && self.antipatterns.is_empty()
    }

    /// Check whether a domain or URL is in scope
    pub fn in_scope(&self, domain: &str) -> bool {
        self.classify(domain).is_in_scope()
    }

    /// Classify a domain or URL
    ///
    /// URL-shaped input is matched on its hostname only. Exclusion always
    /// wins over inclusion.
    pub fn classify(&self, domain: &str) -> Verdict {
        let target: Cow<'_, str> = if is_url(domain) {
            match extract_hostname(domain) {
                Ok(host) => Cow::Owned(host),
                Err(e) => {
                    debug!("{}", e);
                    return Verdict::InvalidUrl;
                }
            }
        } else {
            Cow::Borrowed(domain)
        };

        let Some(hit) = self.patterns.iter().find(|p| p.is_match(&target)) else {
            return Verdict::OutOfScope;
        };
        trace!("{} included by {}", target, hit);

        // Nothing included means nothing to exclude, so antipatterns are only
        // consulted after an inclusion hit.
        if let Some(anti) = self.antipatterns.iter().find(|p| p.is_match(&target)) {
            trace!("{} excluded by {}", target, anti);
            return Verdict::OutOfScope;
        }

        Verdict::InScope
    }
}
