use crate::backend::ConvolutionBackend;
use crate::error::{ConvError, Result};
use crate::shape::Shape;

/// A dense row-major grid of `i32` values.
///
/// Used for the input matrix `F` and for the output matrix `V`. Convolution is
/// dispatched to a `ConvolutionBackend`, which never mutates its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<i32>,
    shape: Shape,
}

impl Matrix {
    /// Create a matrix from row-major data.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if `data.len() != shape.numel()`.
    pub fn new(data: Vec<i32>, shape: Shape) -> Result<Self> {
        if data.len() != shape.numel() {
            return Err(ConvError::LengthMismatch {
                what: "matrix data",
                expected: shape.numel(),
                got: data.len(),
            });
        }
        Ok(Matrix { data, shape })
    }

    /// Create a zero-filled matrix.
    pub fn zeros(shape: Shape) -> Self {
        Self::filled(shape, 0)
    }

    /// Create a matrix with every cell set to `value`.
    pub fn filled(shape: Shape, value: i32) -> Self {
        Matrix {
            data: vec![value; shape.numel()],
            shape,
        }
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell in row-major order.
    pub fn from_fn(shape: Shape, mut f: impl FnMut(usize, usize) -> i32) -> Self {
        let mut data = Vec::with_capacity(shape.numel());
        for i in 0..shape.rows() {
            for j in 0..shape.cols() {
                data.push(f(i, j));
            }
        }
        Matrix { data, shape }
    }

    /// Build a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let n = rows.len();
        let m = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n * m);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != m {
                return Err(ConvError::InvalidArgument(format!(
                    "row {} has {} elements, expected {}",
                    i,
                    row.len(),
                    m
                )));
            }
            data.extend(row);
        }
        Ok(Matrix {
            data,
            shape: Shape::new(n, m),
        })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the underlying row-major data.
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Consumes the matrix, returning its row-major data.
    pub fn into_data(self) -> Vec<i32> {
        self.data
    }

    /// Value at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row < self.shape.rows() && col < self.shape.cols() {
            Some(self.data[self.shape.index(row, col)])
        } else {
            None
        }
    }

    /// Slice of one row.
    ///
    /// # Panics
    /// Panics if `row >= shape().rows()`.
    pub fn row(&self, row: usize) -> &[i32] {
        let cols = self.shape.cols();
        &self.data[row * cols..(row + 1) * cols]
    }

    /// Iterator over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        // chunks_exact(0) panics; a zero-column matrix has no data anyway.
        self.data.chunks_exact(self.shape.cols().max(1))
    }

    /// Convolve this matrix with `kernel` using the given backend.
    ///
    /// Returns a freshly allocated output matrix with the same shape as `self`.
    pub fn convolve(&self, kernel: &Kernel, backend: &dyn ConvolutionBackend) -> Result<Matrix> {
        let n = self.shape.rows();
        let m = self.shape.cols();
        let out = backend.convolve(&self.data, kernel.data(), n, m, kernel.size())?;
        Matrix::new(out, self.shape)
    }
}

/// A square `K x K` convolution kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    matrix: Matrix,
}

impl Kernel {
    /// Create a kernel of side `k` from row-major data.
    ///
    /// # Errors
    /// `InvalidArgument` if `k == 0`, `LengthMismatch` if `data.len() != k * k`.
    pub fn new(data: Vec<i32>, k: usize) -> Result<Self> {
        if k == 0 {
            return Err(ConvError::InvalidArgument(
                "kernel size must be >= 1".to_string(),
            ));
        }
        let matrix = Matrix::new(data, Shape::square(k))?;
        Ok(Kernel { matrix })
    }

    /// Wrap an existing matrix, which must be square and non-empty.
    pub fn from_matrix(matrix: Matrix) -> Result<Self> {
        let shape = matrix.shape();
        if !shape.is_square() {
            return Err(ConvError::InvalidArgument(format!(
                "kernel must be square, got {}",
                shape
            )));
        }
        Kernel::new(matrix.into_data(), shape.rows())
    }

    /// Kernel of side `k` with every tap set to `value`.
    pub fn filled(k: usize, value: i32) -> Result<Self> {
        Kernel::new(vec![value; k * k], k)
    }

    /// Side length `K`.
    pub fn size(&self) -> usize {
        self.matrix.shape().rows()
    }

    /// Radius from the center tap, `K / 2`.
    pub fn offset(&self) -> usize {
        self.size() / 2
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        self.matrix.get(row, col)
    }

    pub fn data(&self) -> &[i32] {
        self.matrix.data()
    }

    pub fn as_matrix(&self) -> &Matrix {
        &self.matrix
    }
}
