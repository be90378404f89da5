//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use inscope_core::ScopeConfig;
use std::ffi::OsString;
use std::path::PathBuf;

/// Long flags that are also accepted with a single dash (`-pwd`, `-osp`)
const SINGLE_DASH_LONG: &[&str] = &["pwd", "osp", "out-scope"];

/// Filter out domains/urls not in scope
///
/// Reads domains or URLs from stdin, one per line, and prints those matching
/// the patterns in `scope.txt`. Lines prefixed with `!` in the scope file
/// are exclusions and always win over inclusions.
#[derive(Parser, Debug)]
#[command(name = "inscope")]
#[command(author, version, about, long_about)]
pub struct Args {
    /// The workspace containing scope.txt (default current directory)
    #[arg(long = "pwd", value_name = "PATH", env = "INSCOPE_PWD")]
    pub pwd: Option<PathBuf>,

    /// Show out-scope items only
    #[arg(long = "out-scope", visible_alias = "osp")]
    pub out_scope: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format for logs
    #[arg(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,

    /// Log file path
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<String>,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// Compact format
    Compact,
}

impl Args {
    /// Parse arguments, accepting single-dash long flags
    pub fn parse_normalized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize(args))
    }

    /// Build the run configuration
    pub fn scope_config(&self) -> ScopeConfig {
        let mut config = ScopeConfig::default();
        if let Some(ref pwd) = self.pwd {
            config.workspace_dir = pwd.clone();
        }
        config.show_out_of_scope = self.out_scope;
        config
    }
}

/// Rewrite `-pwd`, `-osp` and `-out-scope` (with or without `=value`) to
/// their double-dash form. Everything after a bare `--` is left untouched.
pub fn normalize<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for arg in args.into_iter().map(Into::into) {
        if passthrough {
            out.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|s| {
            if s == "--" {
                passthrough = true;
                return None;
            }
            let rest = s.strip_prefix('-').filter(|r| !r.starts_with('-'))?;
            let name = rest.split('=').next().unwrap_or(rest);
            SINGLE_DASH_LONG
                .contains(&name)
                .then(|| OsString::from(format!("-{s}")))
        });

        out.push(rewritten.unwrap_or(arg));
    }

    out
}
