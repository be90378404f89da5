//! Run configuration
//!
//! Replaces process-wide flags with an explicit structure handed to the
//! loader and the line filter.

use std::path::{Path, PathBuf};

/// Name of the scope definition file looked up in the workspace directory
pub const SCOPE_FILE_NAME: &str = "scope.txt";

/// Configuration for a single filtering run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeConfig {
    /// Directory containing `scope.txt`
    pub workspace_dir: PathBuf,
    /// Print out-of-scope items instead of in-scope ones
    pub show_out_of_scope: bool,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        let workspace_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            workspace_dir,
            show_out_of_scope: false,
        }
    }
}

impl ScopeConfig {
    /// Create a configuration for the given workspace directory
    pub fn new<P: AsRef<Path>>(workspace_dir: P, show_out_of_scope: bool) -> Self {
        Self {
            workspace_dir: workspace_dir.as_ref().to_path_buf(),
            show_out_of_scope,
        }
    }

    /// Full path of the scope file
    pub fn scope_file(&self) -> PathBuf {
        self.workspace_dir.join(SCOPE_FILE_NAME)
    }

    /// Whether an item with the given classification should be printed
    pub fn wants(&self, in_scope: bool) -> bool {
        in_scope != self.show_out_of_scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_file_path() {
        let config = ScopeConfig::new("/srv/recon", false);
        assert_eq!(config.scope_file(), PathBuf::from("/srv/recon/scope.txt"));
    }

    #[test]
    fn test_wants() {
        let default_mode = ScopeConfig::new(".", false);
        assert!(default_mode.wants(true));
        assert!(!default_mode.wants(false));

        let out_scope = ScopeConfig::new(".", true);
        assert!(!out_scope.wants(true));
        assert!(out_scope.wants(false));
    }

    #[test]
    fn test_default_shows_in_scope() {
        let config = ScopeConfig::default();
        assert!(!config.show_out_of_scope);
        assert!(config.scope_file().ends_with(SCOPE_FILE_NAME));
    }
}
