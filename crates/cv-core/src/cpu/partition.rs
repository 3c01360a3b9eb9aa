use std::ops::Range;

use crate::error::{ConvError, Result};

/// A half-open span `[start, end)` of row indices owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "row range start {} > end {}", start, end);
        RowRange { start, end }
    }

    /// The whole `[0, n)` range, as used by the sequential path.
    pub fn full(n: usize) -> Self {
        RowRange { start: 0, end: n }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn iter(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split `n` rows into `p` contiguous, disjoint ranges ordered by start.
///
/// The first `n % p` ranges get one extra row, so any two ranges differ in
/// length by at most one. When `p > n` the trailing ranges are empty.
///
/// # Errors
/// `InvalidArgument` if `p == 0`.
pub fn partition_rows(n: usize, p: usize) -> Result<Vec<RowRange>> {
    if p == 0 {
        return Err(ConvError::InvalidArgument(
            "worker count must be >= 1".to_string(),
        ));
    }

    let chunk_size = n / p;
    let remainder = n % p;

    let mut ranges = Vec::with_capacity(p);
    let mut start = 0;
    for i in 0..p {
        let end = start + chunk_size + usize::from(i < remainder);
        ranges.push(RowRange::new(start, end));
        start = end;
    }
    debug_assert_eq!(start, n);
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lens(ranges: &[RowRange]) -> Vec<usize> {
        ranges.iter().map(RowRange::len).collect()
    }

    #[test]
    fn test_even_split() {
        let r = partition_rows(8, 4).unwrap();
        assert_eq!(lens(&r), vec![2, 2, 2, 2]);
        assert_eq!(r[0], RowRange::new(0, 2));
        assert_eq!(r[3], RowRange::new(6, 8));
    }

    #[test]
    fn test_remainder_goes_first() {
        let r = partition_rows(10, 4).unwrap();
        assert_eq!(lens(&r), vec![3, 3, 2, 2]);
        assert_eq!(r[1], RowRange::new(3, 6));
        assert_eq!(r[2], RowRange::new(6, 8));
    }

    #[test]
    fn test_more_workers_than_rows() {
        let r = partition_rows(3, 5).unwrap();
        assert_eq!(lens(&r), vec![1, 1, 1, 0, 0]);
        assert!(r[3].is_empty());
        assert_eq!(r[4], RowRange::new(3, 3));
    }

    #[test]
    fn test_zero_rows() {
        let r = partition_rows(0, 3).unwrap();
        assert_eq!(r.len(), 3);
        assert!(r.iter().all(RowRange::is_empty));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let err = partition_rows(10, 0).unwrap_err();
        assert!(matches!(err, ConvError::InvalidArgument(_)));
    }

    proptest! {
        #[test]
        fn prop_partition_covers_rows_exactly_once(n in 0usize..2000, p in 1usize..64) {
            let ranges = partition_rows(n, p).unwrap();
            prop_assert_eq!(ranges.len(), p);

            let mut next = 0;
            for r in &ranges {
                prop_assert_eq!(r.start, next);
                prop_assert!(r.start <= r.end);
                next = r.end;
            }
            prop_assert_eq!(next, n);

            let max = ranges.iter().map(RowRange::len).max().unwrap();
            let min = ranges.iter().map(RowRange::len).min().unwrap();
            prop_assert!(max - min <= 1);
        }
    }
}
