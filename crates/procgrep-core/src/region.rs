use std::fmt;
use std::path::Path;

use serde::Serialize;

/// One contiguous range of the target's virtual address space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryRegion {
    /// First address of the range.
    pub begin: u64,
    /// One past the last address; always greater than `begin`.
    pub end: u64,
    /// Path of the backing file, or the kernel's pseudo-path for special
    /// mappings. Empty for anonymous mappings.
    pub backing_path: String,
    pub kind: RegionKind,
}

impl MemoryRegion {
    pub fn size(&self) -> u64 {
        self.end - self.begin
    }

    /// Whether `address` falls inside this region.
    pub fn contains(&self, address: u64) -> bool {
        (self.begin..self.end).contains(&address)
    }
}

impl fmt::Display for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}-{:#x} {}", self.begin, self.end, self.kind)
    }
}

/// Classification of a readable mapping.
///
/// The set is closed: readable mappings that fit none of these kinds, such
/// as shared libraries or other file-backed mappings, never enter the region
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    /// Backed by the target's own executable.
    Code,
    /// The `[heap]` mapping.
    Heap,
    /// The `[stack]` mapping.
    Stack,
    /// No backing file at all, typically obtained through `mmap`.
    Anonymous,
}

impl RegionKind {
    /// Classify a mapping by its backing path. Returns `None` for mappings
    /// that are not inspected.
    ///
    /// Readability is decided before classification; callers only pass paths
    /// of mappings that are readable in the first place.
    pub fn classify(backing_path: &str, exe_path: &Path) -> Option<Self> {
        match backing_path {
            "[heap]" => Some(Self::Heap),
            "[stack]" => Some(Self::Stack),
            "" => Some(Self::Anonymous),
            path if Path::new(path) == exe_path => Some(Self::Code),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Heap => "heap",
            Self::Stack => "stack",
            Self::Anonymous => "anon",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
