//! Search command implementation.
//!
//! Scans every region of the target for a byte pattern and prints the
//! absolute address of each occurrence, with the kind of region it lies in.

use anyhow::{Result, bail};
use procgrep_core::DEFAULT_WINDOW_SIZE;

use crate::commands::hex_utils::parse_hex_pattern;
use crate::commands::open_session;
use crate::config::Config;

/// Run the search command
pub fn run(
    process: &str,
    pattern: &str,
    hex: bool,
    limit: Option<usize>,
    window_size: Option<usize>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let needle = if hex {
        parse_hex_pattern(pattern)?
    } else {
        pattern.as_bytes().to_vec()
    };
    if needle.is_empty() {
        bail!("empty pattern");
    }

    let window_size = window_size
        .or(config.window_size)
        .unwrap_or(DEFAULT_WINDOW_SIZE);
    let limit = limit.or(config.limit);

    let mut session = open_session(process)?;
    let report = session.search_with_window(&needle, window_size)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let shown = match limit {
        Some(limit) => limit.min(report.matches.len()),
        None => report.matches.len(),
    };
    for m in &report.matches[..shown] {
        println!("{:#x}  {}", m.address, m.kind);
    }
    if shown < report.matches.len() {
        println!("... and {} more", report.matches.len() - shown);
    }
    if report.matches.is_empty() {
        println!("pattern not found in {} regions", report.regions_scanned);
    }
    Ok(())
}
