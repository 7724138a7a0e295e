//! Parsing of the kernel's per-process mapping listing.

use std::io::BufRead;
use std::path::Path;

use crate::error::{Error, Result};
use crate::region::{MemoryRegion, RegionKind};

/// Parse a mapping listing into the region table.
///
/// The first line is treated as a column header and skipped. Mappings
/// without read permission are dropped, and the survivors are classified
/// against `exe_path`; mappings that classify to no [`RegionKind`] are
/// dropped as well. Parsing stops at the first line that does not match the
/// expected field layout and reports it as
/// [`Error::MalformedMapping`].
///
/// Lines are decoded lossily: a backing path that is not valid UTF-8 still
/// parses, never matches `exe_path`, and its mapping is dropped with the
/// other unclassified ones.
///
/// Because the kernel emits mappings in ascending address order, the
/// returned table is sorted by `begin` and free of overlaps.
pub fn parse_region_table<R: BufRead>(mut listing: R, exe_path: &Path) -> Result<Vec<MemoryRegion>> {
    let mut regions = Vec::new();
    let mut raw = Vec::new();
    let mut index = 0usize;
    loop {
        raw.clear();
        if listing.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
        }
        index += 1;
        if index == 1 {
            // column header
            continue;
        }
        // Backing paths are raw kernel bytes, not guaranteed UTF-8.
        let line = String::from_utf8_lossy(&raw);
        let Some(mapping) = parse_mapping_line(&line) else {
            return Err(Error::MalformedMapping {
                line: line.into_owned(),
            });
        };
        if !mapping.readable() {
            continue;
        }
        let Some(kind) = RegionKind::classify(mapping.pathname, exe_path) else {
            continue;
        };
        regions.push(MemoryRegion {
            begin: mapping.begin,
            end: mapping.end,
            backing_path: mapping.pathname.to_string(),
            kind,
        });
    }
    Ok(regions)
}

struct MappingLine<'a> {
    begin: u64,
    end: u64,
    perms: &'a str,
    pathname: &'a str,
}

impl MappingLine<'_> {
    fn readable(&self) -> bool {
        self.perms.starts_with('r')
    }
}

/// Field layout: `begin-end perms offset major:minor inode [pathname]`.
/// The pathname column is padded with spaces and may itself contain spaces.
fn parse_mapping_line(line: &str) -> Option<MappingLine<'_>> {
    let mut fields = line.splitn(6, ' ');

    let mut range = fields.next()?.split('-');
    let begin = u64::from_str_radix(range.next()?, 16).ok()?;
    let end = u64::from_str_radix(range.next()?, 16).ok()?;
    if range.next().is_some() || end <= begin {
        return None;
    }

    let perms = fields.next()?;
    if perms.len() != 4 {
        return None;
    }

    // file offset
    u64::from_str_radix(fields.next()?, 16).ok()?;

    let (major, minor) = fields.next()?.split_once(':')?;
    u64::from_str_radix(major, 16).ok()?;
    u64::from_str_radix(minor, 16).ok()?;

    // inode
    fields.next()?.parse::<u64>().ok()?;

    let pathname = fields.next().map_or("", str::trim);
    Some(MappingLine {
        begin,
        end,
        perms,
        pathname,
    })
}
