pub mod boundary;
pub mod parallel;
pub mod partition;
pub mod worker;

pub use boundary::TapWindow;
pub use parallel::ParallelBackend;
pub use partition::{partition_rows, RowRange};
pub use worker::ConvolutionWorker;

use crate::backend::{check_dims, ConvolutionBackend};
use crate::error::{ConvError, Result};

/// Single-threaded reference backend.
///
/// Runs one [`ConvolutionWorker`] over the full `[0, n)` row range on the
/// calling thread. Serves as the `p = 1` path and as the correctness oracle
/// for [`ParallelBackend`].
#[derive(Debug, Clone)]
pub struct SequentialBackend;

impl SequentialBackend {
    pub fn new() -> Self {
        SequentialBackend
    }
}

impl Default for SequentialBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvolutionBackend for SequentialBackend {
    fn name(&self) -> &str {
        "sequential"
    }

    fn threads(&self) -> usize {
        1
    }

    fn convolve_into(
        &self,
        input: &[i32],
        kernel: &[i32],
        output: &mut [i32],
        n: usize,
        m: usize,
        k: usize,
    ) -> Result<()> {
        check_dims(input, kernel, output, n, m, k)?;
        ConvolutionWorker::new(input, kernel, n, m, k).run(RowRange::full(n), output);
        Ok(())
    }
}

/// Pick the backend for a thread count: `1` runs sequentially, anything
/// larger uses the parallel coordinator.
///
/// # Errors
/// `InvalidArgument` if `threads == 0`.
pub fn select_backend(threads: usize) -> Result<Box<dyn ConvolutionBackend>> {
    match threads {
        0 => Err(ConvError::InvalidArgument(
            "thread count must be >= 1".to_string(),
        )),
        1 => Ok(Box::new(SequentialBackend::new())),
        p => Ok(Box::new(ParallelBackend::new(p)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> SequentialBackend {
        SequentialBackend::new()
    }

    #[test]
    fn test_all_ones_corner_and_interior() {
        let n = 5;
        let input = vec![1; n * n];
        let kernel = vec![1; 9];
        let v = backend().convolve(&input, &kernel, n, n, 3).unwrap();
        assert_eq!(v[0], 4);
        assert_eq!(v[n - 1], 4);
        assert_eq!(v[(n - 1) * n], 4);
        assert_eq!(v[n * n - 1], 4);
        for i in 1..n - 1 {
            for j in 1..n - 1 {
                assert_eq!(v[i * n + j], 9);
            }
        }
    }

    #[test]
    fn test_unit_kernel_scales() {
        let input = vec![1, -2, 3, 4, 0, 6];
        let v = backend().convolve(&input, &[3], 2, 3, 1).unwrap();
        assert_eq!(v, vec![3, -6, 9, 12, 0, 18]);
    }

    #[test]
    fn test_known_values() {
        // [1,2,3;4,5,6;7,8,9] with a 3x3 all-ones kernel
        let input = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
        let v = backend().convolve(&input, &[1; 9], 3, 3, 3).unwrap();
        assert_eq!(v, vec![12, 21, 16, 27, 45, 33, 24, 39, 28]);
    }

    #[test]
    fn test_empty_matrix() {
        let v = backend().convolve(&[], &[1; 9], 0, 4, 3).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_zero_kernel_rejected() {
        let err = backend().convolve(&[1; 4], &[], 2, 2, 0).unwrap_err();
        assert!(matches!(err, ConvError::InvalidArgument(_)));
    }

    #[test]
    fn test_input_length_mismatch() {
        assert!(backend().convolve(&[1; 3], &[1], 2, 2, 1).is_err());
    }

    #[test]
    fn test_select_backend() {
        assert_eq!(select_backend(1).unwrap().name(), "sequential");
        let b = select_backend(4).unwrap();
        assert_eq!(b.name(), "parallel");
        assert_eq!(b.threads(), 4);
        assert!(select_backend(0).unwrap_err().is_invalid_argument());
    }
}
