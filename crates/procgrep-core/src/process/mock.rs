//! In-memory stand-in for a process memory image, used by tests.

use crate::error::{Error, Result};
use crate::process::ReadMemory;
use crate::region::{MemoryRegion, RegionKind};

/// A [`ReadMemory`] implementation serving a set of disjoint address ranges.
///
/// Reads must land entirely inside one segment; anything else fails the way
/// an unmapped page would on a live process.
#[derive(Debug, Clone, Default)]
pub struct MockMemory {
    segments: Vec<(u64, Vec<u8>)>,
}

impl MockMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `data` at `address`. Segments must not overlap.
    pub fn with_segment(mut self, address: u64, data: &[u8]) -> Self {
        self.segments.push((address, data.to_vec()));
        self
    }

    /// The segment layout as a region table, each segment classified as
    /// anonymous.
    pub fn regions(&self) -> Vec<MemoryRegion> {
        self.segments
            .iter()
            .map(|(address, data)| MemoryRegion {
                begin: *address,
                end: *address + data.len() as u64,
                backing_path: String::new(),
                kind: RegionKind::Anonymous,
            })
            .collect()
    }
}

impl ReadMemory for MockMemory {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        for (start, data) in &self.segments {
            let Some(offset) = address.checked_sub(*start) else {
                continue;
            };
            if offset > data.len() as u64 {
                continue;
            }
            let offset = offset as usize;
            if size <= data.len() - offset {
                return Ok(data[offset..offset + size].to_vec());
            }
        }
        Err(Error::UnreadableRange {
            position: address as i64,
            count: size as u64,
            message: "address range is not mapped".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_within_segment() {
        let mock = MockMemory::new().with_segment(0x1000, b"hello world");
        assert_eq!(mock.read_bytes(0x1000, 5).unwrap(), b"hello");
        assert_eq!(mock.read_bytes(0x1006, 5).unwrap(), b"world");
    }

    #[test]
    fn test_read_across_segments() {
        let mock = MockMemory::new()
            .with_segment(0x1000, b"aaaa")
            .with_segment(0x2000, b"bbbb");
        assert_eq!(mock.read_bytes(0x2000, 4).unwrap(), b"bbbb");
        assert!(mock.read_bytes(0x1002, 4).is_err());
        assert!(mock.read_bytes(0x3000, 1).is_err());
    }

    #[test]
    fn test_regions_mirror_segments() {
        let mock = MockMemory::new()
            .with_segment(0x1000, b"aaaa")
            .with_segment(0x2000, b"bbbbbbbb");
        let regions = mock.regions();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].begin, 0x1000);
        assert_eq!(regions[0].end, 0x1004);
        assert_eq!(regions[1].begin, 0x2000);
        assert_eq!(regions[1].end, 0x2008);
        assert!(regions.iter().all(|r| r.kind == RegionKind::Anonymous));
    }
}
