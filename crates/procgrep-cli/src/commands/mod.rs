//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod hex_utils;
pub mod read;
pub mod regions;
pub mod search;

use anyhow::Result;
use procgrep_core::MemorySession;

/// Open a session for a process argument. A numeric argument is used as a
/// pid directly; anything else goes through name resolution.
pub fn open_session(process: &str) -> Result<MemorySession> {
    let session = match process.parse::<u32>() {
        Ok(pid) => MemorySession::attach(pid)?,
        Err(_) => MemorySession::attach_by_name(process)?,
    };
    Ok(session)
}
