//! Read command implementation.
//!
//! Reads a byte range out of the target's memory and prints it as a
//! hexdump, or writes the raw bytes to stdout for piping into other tools.

use std::fmt::Write as _;
use std::io::{self, Write};

use anyhow::Result;

use crate::commands::hex_utils::{parse_count, parse_position};
use crate::commands::open_session;

/// Run the read command
pub fn run(process: &str, position: &str, count: &str, raw: bool) -> Result<()> {
    let position = parse_position(position)?;
    let count = parse_count(count)?;

    let mut session = open_session(process)?;
    let bytes = session.read(position, count)?;

    if raw {
        io::stdout().write_all(&bytes)?;
    } else {
        print!("{}", format_hexdump(position, &bytes));
    }
    Ok(())
}

/// Render bytes as `address  hex bytes  |ascii|` rows, 16 bytes per row.
fn format_hexdump(base: i64, bytes: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in bytes.chunks(16).enumerate() {
        let address = base + (row * 16) as i64;
        let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
        let ascii: String = chunk
            .iter()
            .map(|&b| {
                if (0x20..0x7f).contains(&b) {
                    b as char
                } else {
                    '.'
                }
            })
            .collect();
        let _ = writeln!(out, "{address:#014x}  {:<47}  |{ascii}|", hex.join(" "));
    }
    out
}
