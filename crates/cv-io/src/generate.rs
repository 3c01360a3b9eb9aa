use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cv_core::{Kernel, Matrix, Shape};

use crate::error::Result;

/// Values are drawn uniformly from `0..VALUE_BOUND`.
pub const VALUE_BOUND: i32 = 10;

/// Random matrix source for benchmarks and generated input files.
///
/// Seeded generators are reproducible across runs.
pub struct MatrixGenerator {
    rng: StdRng,
}

impl MatrixGenerator {
    /// Create a generator from `seed`, or from OS entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn matrix(&mut self, rows: usize, cols: usize) -> Matrix {
        let rng = &mut self.rng;
        Matrix::from_fn(Shape::new(rows, cols), |_, _| rng.gen_range(0..VALUE_BOUND))
    }

    /// # Errors
    /// Fails if `k == 0`.
    pub fn kernel(&mut self, k: usize) -> Result<Kernel> {
        let matrix = self.matrix(k, k);
        Ok(Kernel::from_matrix(matrix)?)
    }
}
