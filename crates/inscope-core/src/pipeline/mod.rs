//! Line-by-line filtering
//!
//! Reads newline-delimited domains or URLs, classifies each one in arrival
//! order and writes the requested side immediately.

mod stats;

pub use stats::Stats;

use crate::config::ScopeConfig;
use crate::error::Result;
use crate::scope::ScopeChecker;
use std::borrow::Cow;
use std::io::{BufRead, ErrorKind, Write};
use tracing::{debug, instrument};

/// Filter every line of `reader` into `writer`
///
/// Each line is trimmed before classification and written trimmed. Output
/// is flushed per line so downstream tools see results as they arrive.
/// A closed downstream pipe ends the run without error.
#[instrument(skip_all, fields(out_scope = config.show_out_of_scope))]
pub fn filter_lines<R, W>(
    checker: &ScopeChecker,
    config: &ScopeConfig,
    mut reader: R,
    mut writer: W,
) -> Result<Stats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = Stats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let domain = line.trim();

        let verdict = checker.classify(domain);
        stats.record(verdict);
        debug!("{:?}: {}", verdict, domain);

        if !config.wants(verdict.is_in_scope()) {
            continue;
        }

        // Invalid UTF-8 is classified lossily but echoed as read
        let echo = match line {
            Cow::Borrowed(valid) => valid.trim().as_bytes(),
            Cow::Owned(_) => trim_ascii(&buf),
        };

        let written = writer
            .write_all(echo)
            .and_then(|()| writer.write_all(b"\n"))
            .and_then(|()| writer.flush());
        match written {
            Ok(()) => stats.printed += 1,
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("Output closed, stopping");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    debug!(
        "Processed {} lines: {} in scope, {} out of scope ({} invalid URLs), {} printed",
        stats.lines, stats.in_scope, stats.out_of_scope, stats.invalid_urls, stats.printed
    );
    Ok(stats)
}

fn trim_ascii(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}
