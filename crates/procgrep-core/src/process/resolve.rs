//! Process-name resolution against the live process list.

use sysinfo::{PidExt, ProcessExt, System, SystemExt};

use crate::error::{Error, Result};

/// Find the pid of the first running process whose name equals `name`.
///
/// Callers holding a numeric pid should use it directly; this lookup exists
/// for human-readable names only.
pub fn resolve_pid(name: &str) -> Result<u32> {
    let mut system = System::new();
    system.refresh_processes();
    system
        .processes_by_exact_name(name)
        .next()
        .map(|process| process.pid().as_u32())
        .ok_or_else(|| Error::ProcessNotFound(name.to_string()))
}
