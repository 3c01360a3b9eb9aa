use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use cv_core::{Kernel, Matrix};

use crate::error::Result;

/// Write `matrix` one row per line, values separated by single spaces.
pub fn write_matrix_to<W: Write>(writer: &mut W, matrix: &Matrix) -> io::Result<()> {
    for row in matrix.rows() {
        write_row(writer, row)?;
    }
    Ok(())
}

/// Write `matrix` to the file at `path`, replacing it if it exists.
pub fn write_matrix(path: &Path, matrix: &Matrix) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_matrix_to(&mut writer, matrix)?;
    writer.flush()?;
    Ok(())
}

/// Write an input file in the layout `InputFile::parse` reads.
pub fn write_input_to<W: Write>(writer: &mut W, input: &Matrix, kernel: &Kernel) -> io::Result<()> {
    let shape = input.shape();
    writeln!(writer, "{} {} {}", shape.rows(), shape.cols(), kernel.size())?;
    write_matrix_to(writer, input)?;
    write_matrix_to(writer, kernel.as_matrix())
}

pub fn write_input(path: &Path, input: &Matrix, kernel: &Kernel) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_input_to(&mut writer, input, kernel)?;
    writer.flush()?;
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, row: &[i32]) -> io::Result<()> {
    for (j, value) in row.iter().enumerate() {
        if j > 0 {
            writer.write_all(b" ")?;
        }
        write!(writer, "{}", value)?;
    }
    writer.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::InputFile;
    use cv_core::Shape;

    #[test]
    fn test_write_matrix_to() {
        let m = Matrix::from_rows(vec![vec![1, -2, 3], vec![40, 0, 6]]).unwrap();
        let mut buf = Vec::new();
        write_matrix_to(&mut buf, &m).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 -2 3\n40 0 6\n");
    }

    #[test]
    fn test_write_empty_matrix() {
        let mut buf = Vec::new();
        write_matrix_to(&mut buf, &Matrix::zeros(Shape::new(0, 3))).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_write_input_is_parseable() {
        let input = Matrix::from_fn(Shape::new(3, 2), |i, j| (i * 2 + j) as i32 - 3);
        let kernel = Kernel::new(vec![0, 1, 0, 1, -4, 1, 0, 1, 0], 3).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("date.txt");
        write_input(&path, &input, &kernel).unwrap();

        let parsed = InputFile::open(&path).unwrap();
        assert_eq!(parsed.input, input);
        assert_eq!(parsed.kernel, kernel);
    }

    #[test]
    fn test_write_matrix_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");
        let m = Matrix::filled(Shape::new(2, 2), 9);
        write_matrix(&path, &m).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "9 9\n9 9\n");
    }
}
