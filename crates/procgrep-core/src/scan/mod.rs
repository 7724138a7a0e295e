//! Region-aware pattern search over a process memory image.
//!
//! Regions are scanned in table order, window by window. The trailing
//! `pattern.len() - 1` bytes of every searched buffer are carried into the
//! next window, so occurrences straddling a window boundary are found. A
//! carry of exactly that length also guarantees no occurrence is reported
//! twice: an occurrence lying entirely inside the carried bytes would have
//! to be shorter than the pattern.

mod pattern;
mod windows;

pub use pattern::find_pattern;
pub use windows::{DEFAULT_WINDOW_SIZE, RegionWindows, Window};

use serde::Serialize;
use tracing::{debug, warn};

use crate::process::ReadMemory;
use crate::region::{MemoryRegion, RegionKind};

/// A single occurrence of the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Absolute address of the first pattern byte.
    pub address: u64,
    /// Kind of the region the occurrence lies in.
    pub kind: RegionKind,
}

/// A region whose scan stopped before its last window.
#[derive(Debug, Clone, Serialize)]
pub struct TruncatedRegion {
    pub begin: u64,
    pub end: u64,
    /// Address of the window that failed to read.
    pub failed_at: u64,
    pub reason: String,
}

/// Outcome of a search across a region table.
///
/// Zero matches is an ordinary outcome, not an error.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub regions_scanned: usize,
    /// Every occurrence found, in region-table order and ascending within
    /// each region.
    pub matches: Vec<Match>,
    /// Regions the scan could not finish, typically because pages were
    /// unmapped after the table was built or the target exited mid-scan.
    /// Matches found before the failure are kept and later regions are
    /// still scanned.
    pub truncated: Vec<TruncatedRegion>,
}

impl ScanReport {
    pub fn addresses(&self) -> impl Iterator<Item = u64> + '_ {
        self.matches.iter().map(|m| m.address)
    }
}

/// Scans regions of a memory image for a literal byte pattern.
pub struct Scanner<'a, R: ReadMemory> {
    reader: &'a R,
    window_size: usize,
}

impl<'a, R: ReadMemory> Scanner<'a, R> {
    pub fn new(reader: &'a R) -> Self {
        Self::with_window_size(reader, DEFAULT_WINDOW_SIZE)
    }

    pub fn with_window_size(reader: &'a R, window_size: usize) -> Self {
        Self {
            reader,
            window_size: window_size.max(1),
        }
    }

    /// Search `regions` in table order, collecting every occurrence of
    /// `pattern`. An empty pattern matches nothing.
    pub fn scan(&self, regions: &[MemoryRegion], pattern: &[u8]) -> ScanReport {
        let mut report = ScanReport::default();
        if pattern.is_empty() {
            return report;
        }
        for region in regions {
            self.scan_region(region, pattern, &mut report);
            report.regions_scanned += 1;
        }
        debug!(
            "scanned {} regions: {} matches, {} truncated",
            report.regions_scanned,
            report.matches.len(),
            report.truncated.len()
        );
        report
    }

    fn scan_region(&self, region: &MemoryRegion, pattern: &[u8], report: &mut ScanReport) {
        let mut carry: Vec<u8> = Vec::new();
        let mut next_address = region.begin;
        for window in RegionWindows::new(self.reader, region.begin, region.end, self.window_size) {
            let window = match window {
                Ok(window) => window,
                Err(e) => {
                    warn!(
                        "scan of region {:#x}-{:#x} stopped at {:#x}: {}",
                        region.begin, region.end, next_address, e
                    );
                    report.truncated.push(TruncatedRegion {
                        begin: region.begin,
                        end: region.end,
                        failed_at: next_address,
                        reason: e.to_string(),
                    });
                    break;
                }
            };
            next_address = window.address + window.data.len() as u64;

            let carried = carry.len() as u64;
            let mut haystack = std::mem::take(&mut carry);
            haystack.extend_from_slice(&window.data);

            // The haystack starts `carried` bytes before the window.
            let haystack_base = window.address - carried;
            for offset in find_pattern(&haystack, pattern) {
                report.matches.push(Match {
                    address: haystack_base + offset as u64,
                    kind: region.kind,
                });
            }

            if pattern.len() > 1 {
                let keep = (pattern.len() - 1).min(haystack.len());
                haystack.drain(..haystack.len() - keep);
                carry = haystack;
            }
        }
    }
}
