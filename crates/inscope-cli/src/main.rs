//! inscope CLI
//!
//! Reads domains/URLs from stdin and prints those inside (or, with `-osp`,
//! outside) the scope defined by `scope.txt`.

mod args;
mod logging;
mod run;

use std::process::ExitCode;
use tracing::debug;

use args::Args;

fn main() -> ExitCode {
    let args = Args::parse_normalized(std::env::args_os());

    if let Err(e) = logging::init(&args) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    let config = args.scope_config();
    debug!("Using scope file {}", config.scope_file().display());

    match run::execute_stdio(&config) {
        Ok(stats) => {
            debug!(
                "Done: {} lines, {} in scope, {} out of scope",
                stats.lines, stats.in_scope, stats.out_of_scope
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Always visible, regardless of log level
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
