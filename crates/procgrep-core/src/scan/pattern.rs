//! Literal pattern matching over in-memory buffers.

/// Find all occurrences of a pattern in a buffer.
///
/// Returns the byte offsets where the pattern starts, in ascending order.
/// Occurrences may overlap: every start offset is reported, so searching for
/// `aa` in `aaa` yields offsets 0 and 1.
///
/// # Example
/// ```
/// use procgrep_core::scan::find_pattern;
///
/// let buffer = [1, 2, 3, 1, 2, 3, 4];
/// assert_eq!(find_pattern(&buffer, &[1, 2, 3]), vec![0, 3]);
/// ```
pub fn find_pattern(buffer: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > buffer.len() {
        return Vec::new();
    }
    buffer
        .windows(pattern.len())
        .enumerate()
        .filter_map(|(i, window)| if window == pattern { Some(i) } else { None })
        .collect()
}
