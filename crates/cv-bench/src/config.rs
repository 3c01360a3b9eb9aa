use std::str::FromStr;

use cv_core::Shape;

use crate::error::{BenchError, Result};

/// Configuration for a benchmark sweep: every matrix size is run against
/// every kernel size at every thread count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Input matrix dimensions.
    pub matrix_sizes: Vec<Shape>,
    /// Kernel side lengths `K`.
    pub kernel_sizes: Vec<usize>,
    /// Worker counts; `1` runs the sequential backend.
    pub thread_counts: Vec<usize>,
    /// RNG seed for the generated matrices; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Compare every result against the sequential backend.
    pub verify: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            matrix_sizes: vec![Shape::new(10, 10), Shape::new(100, 100), Shape::new(1000, 1000)],
            kernel_sizes: vec![3, 5],
            thread_counts: vec![1, 2, 4, 8, 16],
            seed: None,
            verify: false,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.matrix_sizes.is_empty() {
            return Err(BenchError::InvalidConfig("no matrix sizes".to_string()));
        }
        if self.kernel_sizes.is_empty() {
            return Err(BenchError::InvalidConfig("no kernel sizes".to_string()));
        }
        if self.thread_counts.is_empty() {
            return Err(BenchError::InvalidConfig("no thread counts".to_string()));
        }
        if self.kernel_sizes.contains(&0) {
            return Err(BenchError::InvalidConfig(
                "kernel sizes must be >= 1".to_string(),
            ));
        }
        if self.thread_counts.contains(&0) {
            return Err(BenchError::InvalidConfig(
                "thread counts must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of timed calls the sweep will make.
    pub fn total_runs(&self) -> usize {
        self.matrix_sizes.len() * self.kernel_sizes.len() * self.thread_counts.len()
    }
}

/// Parse a matrix size written as `ROWSxCOLS` (e.g. `100x100`).
pub fn parse_size(s: &str) -> Result<Shape> {
    let (rows, cols) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| BenchError::InvalidConfig(format!("'{}' is not ROWSxCOLS", s)))?;
    let rows = parse_dim(rows, s)?;
    let cols = parse_dim(cols, s)?;
    Ok(Shape::new(rows, cols))
}

fn parse_dim(part: &str, whole: &str) -> Result<usize> {
    usize::from_str(part.trim())
        .map_err(|_| BenchError::InvalidConfig(format!("'{}' is not ROWSxCOLS", whole)))
}
