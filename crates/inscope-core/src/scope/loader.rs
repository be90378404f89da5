//! Scope file loading

use super::checker::ScopeChecker;
use super::pattern::Pattern;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

impl ScopeChecker {
    /// Load patterns from a line-oriented reader
    ///
    /// All-or-nothing: the first line that fails to compile aborts the load
    /// and nothing read so far is kept.
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        let mut patterns = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(pattern) = Pattern::parse_line(&line, idx + 1)? {
                debug!("Scope pattern {}: {}", idx + 1, pattern);
                patterns.push(pattern);
            }
        }

        Ok(Self::from_patterns(patterns))
    }

    /// Load patterns from a scope file
    ///
    /// The file is read to the end and closed before this returns, whether
    /// or not its contents parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            debug!("Failed to open {}: {}", path.display(), e);
            Error::ScopeFileNotFound {
                path: path.display().to_string(),
            }
        })?;

        let checker = Self::load(BufReader::new(file))?;

        info!(
            "Loaded {} inclusion and {} exclusion patterns from {}",
            checker.inclusions().len(),
            checker.exclusions().len(),
            path.display()
        );
        Ok(checker)
    }
}
