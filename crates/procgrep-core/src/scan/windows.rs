//! Fixed-size window iteration over a slice of the memory image.

use crate::error::Result;
use crate::process::ReadMemory;

/// Number of bytes read per window unless a caller overrides it. One page.
pub const DEFAULT_WINDOW_SIZE: usize = 4096;

/// One window of bytes read out of a region.
#[derive(Debug)]
pub struct Window {
    /// Absolute address of the first byte.
    pub address: u64,
    pub data: Vec<u8>,
}

/// Iterator yielding consecutive windows over `[start, end)`.
///
/// Windows are read in ascending address order and never cross `end`; the
/// final window is shortened to the boundary. A failed read is yielded as an
/// error and iteration can be resumed or abandoned by the caller.
pub struct RegionWindows<'a, R: ReadMemory> {
    reader: &'a R,
    current: u64,
    end: u64,
    window_size: usize,
}

impl<'a, R: ReadMemory> RegionWindows<'a, R> {
    pub fn new(reader: &'a R, start: u64, end: u64, window_size: usize) -> Self {
        Self {
            reader,
            current: start,
            end,
            window_size: window_size.max(1),
        }
    }
}

impl<R: ReadMemory> Iterator for RegionWindows<'_, R> {
    type Item = Result<Window>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.end {
            return None;
        }
        let size = self.window_size.min((self.end - self.current) as usize);
        let address = self.current;
        self.current += size as u64;
        Some(
            self.reader
                .read_bytes(address, size)
                .map(|data| Window { address, data }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::MockMemory;

    #[test]
    fn test_single_window() {
        let mock = MockMemory::new().with_segment(0x1000, &[1, 2, 3, 4]);
        let windows: Vec<Window> = RegionWindows::new(&mock, 0x1000, 0x1004, 16)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].address, 0x1000);
        assert_eq!(windows[0].data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_even_split() {
        let mock = MockMemory::new().with_segment(0x1000, &[0u8; 32]);
        let windows: Vec<Window> = RegionWindows::new(&mock, 0x1000, 0x1020, 16)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].address, 0x1000);
        assert_eq!(windows[1].address, 0x1010);
        assert!(windows.iter().all(|w| w.data.len() == 16));
    }

    #[test]
    fn test_short_final_window() {
        let mock = MockMemory::new().with_segment(0x1000, &[0u8; 20]);
        let windows: Vec<Window> = RegionWindows::new(&mock, 0x1000, 0x1014, 16)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].data.len(), 16);
        assert_eq!(windows[1].address, 0x1010);
        assert_eq!(windows[1].data.len(), 4);
    }

    #[test]
    fn test_empty_range_yields_nothing() {
        let mock = MockMemory::new().with_segment(0x1000, &[0u8; 4]);
        assert!(RegionWindows::new(&mock, 0x1000, 0x1000, 16).next().is_none());
    }

    #[test]
    fn test_unmapped_window_yields_error() {
        // Segment covers half the requested range.
        let mock = MockMemory::new().with_segment(0x1000, &[0u8; 16]);
        let mut windows = RegionWindows::new(&mock, 0x1000, 0x1020, 16);
        assert!(windows.next().unwrap().is_ok());
        assert!(windows.next().unwrap().is_err());
    }
}
