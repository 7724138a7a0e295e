//! Attaching to a target process and reading its memory.

mod maps;
mod reader;
mod resolve;

#[doc(hidden)]
pub mod mock;

pub use maps::parse_region_table;
pub use reader::{MemoryImage, ReadMemory};
pub use resolve::resolve_pid;

#[doc(hidden)]
pub use mock::MockMemory;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::region::MemoryRegion;
use crate::scan::{DEFAULT_WINDOW_SIZE, ScanReport, Scanner};

/// An inspection session against one running process.
///
/// Attaching resolves the target's executable path and snapshots its region
/// table. The table is immutable for the lifetime of the session and does
/// not track later changes to the target's memory map; reads against ranges
/// the target has since unmapped fail instead of returning stale bytes. The
/// memory image is opened on first use and closed when the session is
/// dropped.
pub struct MemorySession {
    pid: u32,
    exe_path: PathBuf,
    regions: Vec<MemoryRegion>,
    image: Option<MemoryImage>,
}

impl MemorySession {
    /// Attach to a process by pid.
    pub fn attach(pid: u32) -> Result<Self> {
        let exe_path = fs::read_link(format!("/proc/{pid}/exe"))
            .map_err(|source| Error::ProcessUnavailable { pid, source })?;
        let maps = File::open(format!("/proc/{pid}/maps"))
            .map_err(|source| Error::ProcessUnavailable { pid, source })?;
        let regions = parse_region_table(BufReader::new(maps), &exe_path)?;
        debug!(
            "attached to pid {pid}: {} regions, exe {}",
            regions.len(),
            exe_path.display()
        );
        Ok(Self {
            pid,
            exe_path,
            regions,
            image: None,
        })
    }

    /// Resolve a process name and attach to the first match.
    pub fn attach_by_name(name: &str) -> Result<Self> {
        Self::attach(resolve_pid(name)?)
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// The resolved path of the target's executable.
    pub fn exe_path(&self) -> &Path {
        &self.exe_path
    }

    /// The region table snapshotted at attach time.
    pub fn regions(&self) -> &[MemoryRegion] {
        &self.regions
    }

    /// Read exactly `count` bytes of the target's memory at `position`.
    pub fn read(&mut self, position: i64, count: u64) -> Result<Vec<u8>> {
        let (image, _) = self.image()?;
        image.read(position, count)
    }

    /// Search every region for `pattern` with the default window size.
    pub fn search(&mut self, pattern: &[u8]) -> Result<ScanReport> {
        self.search_with_window(pattern, DEFAULT_WINDOW_SIZE)
    }

    /// Search every region for `pattern`, reading `window_size` bytes at a
    /// time.
    pub fn search_with_window(&mut self, pattern: &[u8], window_size: usize) -> Result<ScanReport> {
        let (image, regions) = self.image()?;
        Ok(Scanner::with_window_size(image, window_size).scan(regions, pattern))
    }

    /// Open the memory image on first use. Returns the region table
    /// alongside so callers can hold both borrows at once.
    fn image(&mut self) -> Result<(&MemoryImage, &[MemoryRegion])> {
        let image = match self.image.take() {
            Some(image) => image,
            None => MemoryImage::open(self.pid)?,
        };
        let image: &MemoryImage = self.image.insert(image);
        Ok((image, &self.regions))
    }
}
