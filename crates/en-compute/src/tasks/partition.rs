//! Contiguous partitioning of an index space across workers.

use std::ops::Range;

/// Split `0..count` into at most `parts` contiguous, non-empty ranges.
///
/// Ranges are ordered, cover every index exactly once, and differ in length
/// by at most one. The number of ranges is capped at `count`, so no worker
/// is ever handed an empty range.
pub fn partition(count: u64, parts: usize) -> Vec<Range<u64>> {
    let parts = (parts.max(1) as u64).min(count);
    if parts == 0 {
        return Vec::new();
    }

    let base = count / parts;
    let extra = count % parts;
    let mut ranges = Vec::with_capacity(parts as usize);
    let mut start = 0;

    for i in 0..parts {
        let len = base + u64::from(i < extra);
        ranges.push(start..start + len);
        start += len;
    }

    ranges
}
