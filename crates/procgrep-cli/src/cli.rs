//! CLI argument definitions for procgrep.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "procgrep")]
#[command(about = "Search and read the memory of a running process", version)]
pub struct Args {
    /// Load settings from a config file
    #[arg(long, env = "PROCGREP_CONFIG", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search process memory for a byte pattern
    Search {
        /// Target process (pid or exact name)
        process: String,
        /// Pattern to search for (literal text, or hex with --hex)
        pattern: String,
        /// Interpret the pattern as hex byte pairs (e.g., "de ad be ef")
        #[arg(long)]
        hex: bool,
        /// Maximum number of matches to print
        #[arg(long)]
        limit: Option<usize>,
        /// Bytes read per window
        #[arg(long, value_name = "BYTES")]
        window_size: Option<usize>,
        /// Output the full scan report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read raw bytes from process memory
    Read {
        /// Target process (pid or exact name)
        process: String,
        /// Start position (decimal or hex, e.g., 0x7f32a4c01000)
        position: String,
        /// Number of bytes to read
        count: String,
        /// Write the bytes verbatim instead of a hexdump
        #[arg(long)]
        raw: bool,
    },
    /// List the memory regions a search would cover
    Regions {
        /// Target process (pid or exact name)
        process: String,
        /// Output the region table as JSON
        #[arg(long)]
        json: bool,
    },
}
