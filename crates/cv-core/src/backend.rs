use std::fmt::Debug;

use crate::error::{ConvError, Result};

/// Trait for interchangeable convolution execution strategies.
///
/// Data is passed as row-major slices with explicit dimensions:
/// - `input`: the `n x m` matrix `F`
/// - `kernel`: the `k x k` matrix `C`
/// - `output`: the `n x m` matrix `V`
///
/// Implementations validate every length and `k >= 1` before any cell is
/// written, so a failed call leaves `output` untouched.
pub trait ConvolutionBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "sequential", "parallel").
    fn name(&self) -> &str;

    /// Number of worker threads this backend computes with.
    fn threads(&self) -> usize;

    /// Compute `V = F * C` into `output`. Every cell of `output` is overwritten.
    fn convolve_into(
        &self,
        input: &[i32],
        kernel: &[i32],
        output: &mut [i32],
        n: usize,
        m: usize,
        k: usize,
    ) -> Result<()>;

    /// Compute `V = F * C` into a freshly allocated vector.
    fn convolve(&self, input: &[i32], kernel: &[i32], n: usize, m: usize, k: usize) -> Result<Vec<i32>> {
        check_lengths(input, kernel, n, m, k)?;
        let mut output = vec![0i32; n * m];
        self.convolve_into(input, kernel, &mut output, n, m, k)?;
        Ok(output)
    }
}

/// Validate the input and kernel slices against `n`, `m`, `k`.
pub fn check_lengths(input: &[i32], kernel: &[i32], n: usize, m: usize, k: usize) -> Result<()> {
    if k == 0 {
        return Err(ConvError::InvalidArgument(
            "kernel size must be >= 1".to_string(),
        ));
    }
    let numel = n
        .checked_mul(m)
        .ok_or_else(|| ConvError::InvalidArgument(format!("{}x{} overflows usize", n, m)))?;
    if input.len() != numel {
        return Err(ConvError::LengthMismatch {
            what: "input",
            expected: numel,
            got: input.len(),
        });
    }
    let taps = k
        .checked_mul(k)
        .ok_or_else(|| ConvError::InvalidArgument(format!("kernel size {} overflows usize", k)))?;
    if kernel.len() != taps {
        return Err(ConvError::LengthMismatch {
            what: "kernel",
            expected: taps,
            got: kernel.len(),
        });
    }
    Ok(())
}

/// Validate all three slices, including the output `V`.
pub fn check_dims(
    input: &[i32],
    kernel: &[i32],
    output: &[i32],
    n: usize,
    m: usize,
    k: usize,
) -> Result<()> {
    check_lengths(input, kernel, n, m, k)?;
    if output.len() != input.len() {
        return Err(ConvError::LengthMismatch {
            what: "output",
            expected: input.len(),
            got: output.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dims_ok() {
        assert!(check_dims(&[0; 6], &[0; 9], &[0; 6], 2, 3, 3).is_ok());
        assert!(check_dims(&[], &[1], &[], 0, 0, 1).is_ok());
    }

    #[test]
    fn test_check_dims_rejects_zero_kernel() {
        let err = check_dims(&[0; 4], &[], &[0; 4], 2, 2, 0).unwrap_err();
        assert!(matches!(err, ConvError::InvalidArgument(_)));
    }

    #[test]
    fn test_check_dims_mismatches() {
        let err = check_dims(&[0; 5], &[0; 9], &[0; 6], 2, 3, 3).unwrap_err();
        assert!(matches!(err, ConvError::LengthMismatch { what: "input", .. }));

        let err = check_dims(&[0; 6], &[0; 4], &[0; 6], 2, 3, 3).unwrap_err();
        assert!(matches!(err, ConvError::LengthMismatch { what: "kernel", .. }));

        let err = check_dims(&[0; 6], &[0; 9], &[0; 7], 2, 3, 3).unwrap_err();
        assert!(matches!(err, ConvError::LengthMismatch { what: "output", .. }));
    }
}
