use std::fmt;

/// Dimensions of a row-major 2D grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    /// A square `k x k` shape.
    pub fn square(k: usize) -> Self {
        Shape { rows: k, cols: k }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements (rows * cols).
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major flat index of `(row, col)`.
    ///
    /// Does not bounds-check; callers index the backing slice with the result.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape::new(rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_shape() {
        let s = Shape::new(2, 3);
        assert_eq!(s.rows(), 2);
        assert_eq!(s.cols(), 3);
        assert_eq!(s.numel(), 6);
        assert!(!s.is_square());
    }

    #[test]
    fn test_index_row_major() {
        let s = Shape::new(3, 4);
        assert_eq!(s.index(0, 0), 0);
        assert_eq!(s.index(0, 3), 3);
        assert_eq!(s.index(1, 0), 4);
        assert_eq!(s.index(2, 3), 11);
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::new(100, 100).to_string(), "100x100");
        assert_eq!(Shape::square(3).to_string(), "3x3");
    }

    #[test]
    fn test_empty_shape() {
        let s = Shape::new(0, 5);
        assert_eq!(s.numel(), 0);
    }
}
