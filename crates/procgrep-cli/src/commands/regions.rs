//! Regions command implementation.
//!
//! Prints the region table a search would cover, one mapping per row.

use anyhow::Result;

use crate::commands::open_session;

/// Run the regions command
pub fn run(process: &str, json: bool) -> Result<()> {
    let session = open_session(process)?;

    if json {
        println!("{}", serde_json::to_string_pretty(session.regions())?);
        return Ok(());
    }

    println!(
        "pid {} ({}), {} regions",
        session.pid(),
        session.exe_path().display(),
        session.regions().len()
    );
    for region in session.regions() {
        println!(
            "{:#014x}-{:#014x} {:>12}  {:<5} {}",
            region.begin,
            region.end,
            region.size(),
            region.kind,
            region.backing_path
        );
    }
    Ok(())
}
