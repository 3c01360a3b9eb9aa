//! Implicit zero-extension at the matrix edges.
//!
//! Rather than materializing a padded copy of the input, each output cell
//! clips its kernel window per axis to the taps that land inside the input.
//! Taps outside the clipped window contribute zero.

use std::ops::Range;

/// The in-bounds portion of a kernel window along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapWindow {
    /// First kernel index whose tap lands inside the input.
    pub first_tap: usize,
    /// One past the last in-bounds kernel index.
    pub end_tap: usize,
    /// Input index that `first_tap` reads.
    pub first_input: usize,
}

impl TapWindow {
    /// Clip the window centred on `pos` along an axis of length `extent`.
    ///
    /// Kernel index `a` reads input index `pos + a - offset`. The window keeps
    /// the indices where that lands in `[0, extent)` and `a < k`. For even `k`
    /// the last tap of `[-offset, offset]` would be `a == k`; it is dropped.
    ///
    /// Requires `pos < extent` and `offset == k / 2` with `k >= 1`.
    pub fn new(pos: usize, extent: usize, offset: usize, k: usize) -> Self {
        debug_assert!(pos < extent);
        debug_assert!(offset < k);
        let first_tap = offset.saturating_sub(pos);
        let end_tap = k.min(extent + offset - pos);
        TapWindow {
            first_tap,
            end_tap,
            first_input: pos + first_tap - offset,
        }
    }

    /// Kernel indices inside the window.
    pub fn taps(&self) -> Range<usize> {
        self.first_tap..self.end_tap
    }

    /// Input indices read by the window, aligned with `taps()`.
    pub fn inputs(&self) -> Range<usize> {
        self.first_input..self.first_input + self.len()
    }

    pub fn len(&self) -> usize {
        self.end_tap - self.first_tap
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_window_is_full() {
        let w = TapWindow::new(5, 10, 1, 3);
        assert_eq!(w.taps(), 0..3);
        assert_eq!(w.inputs(), 4..7);
    }

    #[test]
    fn test_leading_edge_clipped() {
        let w = TapWindow::new(0, 10, 2, 5);
        assert_eq!(w.taps(), 2..5);
        assert_eq!(w.inputs(), 0..3);

        let w = TapWindow::new(1, 10, 2, 5);
        assert_eq!(w.taps(), 1..5);
        assert_eq!(w.inputs(), 0..4);
    }

    #[test]
    fn test_trailing_edge_clipped() {
        let w = TapWindow::new(9, 10, 1, 3);
        assert_eq!(w.taps(), 0..2);
        assert_eq!(w.inputs(), 8..10);
    }

    #[test]
    fn test_kernel_wider_than_axis() {
        let w = TapWindow::new(0, 1, 2, 5);
        assert_eq!(w.taps(), 2..3);
        assert_eq!(w.inputs(), 0..1);
    }

    #[test]
    fn test_even_kernel_drops_last_tap() {
        // k = 2, offset = 1: u in [-1, 1] but kernel index 2 does not exist.
        let w = TapWindow::new(3, 10, 1, 2);
        assert_eq!(w.taps(), 0..2);
        assert_eq!(w.inputs(), 2..4);
    }

    #[test]
    fn test_unit_kernel() {
        let w = TapWindow::new(0, 1, 0, 1);
        assert_eq!(w.taps(), 0..1);
        assert_eq!(w.inputs(), 0..1);
        assert!(!w.is_empty());
    }
}
