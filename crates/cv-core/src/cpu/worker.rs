use super::boundary::TapWindow;
use super::partition::RowRange;

/// Computes output rows for one assigned `RowRange`.
///
/// Holds shared read-only views of `F` and `C`; the only thing it writes is
/// the output slice handed to [`ConvolutionWorker::run`]. Dimensions are
/// assumed validated by the calling backend.
#[derive(Debug, Clone, Copy)]
pub struct ConvolutionWorker<'a> {
    input: &'a [i32],
    kernel: &'a [i32],
    n: usize,
    m: usize,
    k: usize,
}

impl<'a> ConvolutionWorker<'a> {
    pub fn new(input: &'a [i32], kernel: &'a [i32], n: usize, m: usize, k: usize) -> Self {
        debug_assert_eq!(input.len(), n * m);
        debug_assert_eq!(kernel.len(), k * k);
        ConvolutionWorker {
            input,
            kernel,
            n,
            m,
            k,
        }
    }

    /// Write every cell of rows `range` into `out`.
    ///
    /// `out` holds exactly those rows: `range.len() * m` elements, with
    /// `out[0..m]` being row `range.start`.
    pub fn run(&self, range: RowRange, out: &mut [i32]) {
        debug_assert_eq!(out.len(), range.len() * self.m);
        if self.m == 0 {
            return;
        }
        for (i, row_out) in range.iter().zip(out.chunks_exact_mut(self.m)) {
            let rows = TapWindow::new(i, self.n, self.k / 2, self.k);
            for (j, cell) in row_out.iter_mut().enumerate() {
                *cell = self.cell(rows, j);
            }
        }
    }

    /// Weighted sum for one output cell, given its row window.
    ///
    /// Accumulates in `i32` with two's-complement wraparound.
    fn cell(&self, rows: TapWindow, j: usize) -> i32 {
        let cols = TapWindow::new(j, self.m, self.k / 2, self.k);
        let width = cols.len();

        let mut sum = 0i32;
        for (a, x) in rows.taps().zip(rows.inputs()) {
            let f_row = &self.input[x * self.m + cols.first_input..][..width];
            let c_row = &self.kernel[a * self.k + cols.first_tap..][..width];
            for (&f, &c) in f_row.iter().zip(c_row) {
                sum = sum.wrapping_add(f.wrapping_mul(c));
            }
        }
        sum
    }
}
