//! Random-access reads against a process memory image.

use std::fs::File;
use std::os::unix::fs::FileExt;

use crate::error::{Error, Result};

/// Reads raw bytes out of a memory image.
///
/// The search engine is written against this trait so tests can substitute
/// an in-memory implementation for a live process.
pub trait ReadMemory {
    /// Read exactly `size` bytes starting at `address`.
    ///
    /// A request that cannot be satisfied in full fails with
    /// [`Error::UnreadableRange`]; implementations never return a
    /// short buffer.
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>>;
}

/// The memory image of a process, backed by `/proc/<pid>/mem`.
///
/// Every read is positioned, so the image carries no seek cursor and can
/// serve concurrent reads at independent offsets. The underlying handle is
/// closed on drop.
pub struct MemoryImage {
    file: File,
}

impl MemoryImage {
    /// Open the memory image of a live process.
    pub fn open(pid: u32) -> Result<Self> {
        let file = File::open(format!("/proc/{pid}/mem"))
            .map_err(|source| Error::ProcessUnavailable { pid, source })?;
        Ok(Self { file })
    }

    /// Wrap an already-open file, treating file offsets as addresses. Lets
    /// tests and tools run the same read path against a regular file.
    pub fn from_file(file: File) -> Self {
        Self { file }
    }

    /// Read exactly `count` bytes at a signed position.
    ///
    /// Negative positions are never mapped, so they fail like any other
    /// unsatisfiable range. A `count` no buffer could hold is rejected the
    /// same way.
    pub fn read(&self, position: i64, count: u64) -> Result<Vec<u8>> {
        let Ok(address) = u64::try_from(position) else {
            return Err(Error::UnreadableRange {
                position,
                count,
                message: "position is negative".to_string(),
            });
        };
        let size = match usize::try_from(count) {
            // Allocations are capped at isize::MAX bytes.
            Ok(size) if count <= isize::MAX as u64 => size,
            _ => {
                return Err(Error::UnreadableRange {
                    position,
                    count,
                    message: "count exceeds addressable memory".to_string(),
                });
            }
        };
        self.read_bytes(address, size)
    }
}

impl ReadMemory for MemoryImage {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; size];
        self.file
            .read_exact_at(&mut buffer, address)
            .map_err(|e| Error::UnreadableRange {
                position: address as i64,
                count: size as u64,
                message: e.to_string(),
            })?;
        Ok(buffer)
    }
}
