//! Scope filtering command

use anyhow::{Context, Result};
use inscope_core::{filter_lines, Error, ScopeChecker, ScopeConfig, Stats};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Load `scope.txt` from the workspace
///
/// Open failures and pattern failures are reported separately so the user
/// can tell a wrong `-pwd` from a broken scope file.
pub fn load_scope(config: &ScopeConfig) -> Result<ScopeChecker> {
    match ScopeChecker::from_file(config.scope_file()) {
        Ok(checker) => Ok(checker),
        Err(e @ (Error::ScopeFileNotFound { .. } | Error::Io(_))) => {
            Err(e).context("error opening scope file")
        }
        Err(e) => Err(e).context("error parsing scope file"),
    }
}

/// Load the scope, then filter `input` into `output`
pub fn execute<R, W>(config: &ScopeConfig, input: R, output: W) -> Result<Stats>
where
    R: BufRead,
    W: Write,
{
    let checker = load_scope(config)?;
    if checker.inclusions().is_empty() {
        info!("No inclusion patterns loaded, nothing will be in scope");
    }

    let stats = filter_lines(&checker, config, input, output).context("error filtering input")?;
    Ok(stats)
}

/// Run against the process's stdin and stdout
pub fn execute_stdio(config: &ScopeConfig) -> Result<Stats> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(config, stdin.lock(), stdout.lock())
}
