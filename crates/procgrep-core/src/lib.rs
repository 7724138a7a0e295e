pub mod error;
pub mod process;
pub mod region;
pub mod scan;

pub use error::{Error, Result};
pub use process::{MemoryImage, MemorySession, ReadMemory, parse_region_table, resolve_pid};
pub use region::{MemoryRegion, RegionKind};
pub use scan::{DEFAULT_WINDOW_SIZE, Match, ScanReport, Scanner, TruncatedRegion, find_pattern};
