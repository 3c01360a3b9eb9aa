use std::path::Path;
use std::str::Lines;

use memmap2::Mmap;
use tracing::debug;

use cv_core::{Kernel, Matrix, Shape};

use crate::error::{LoadError, Result};

/// A parsed convolution input file.
///
/// Layout:
/// ```text
/// N M K
/// <N lines of M integers>   input matrix F
/// <K lines of K integers>   kernel C
/// ```
#[derive(Debug, Clone)]
pub struct InputFile {
    pub input: Matrix,
    pub kernel: Kernel,
}

impl InputFile {
    /// Open and parse an input file from disk.
    ///
    /// The file is memory-mapped and parsed in place.
    pub fn open(path: &Path) -> Result<InputFile> {
        let file = std::fs::File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Err(LoadError::EmptyInput);
        }

        let mmap = unsafe { Mmap::map(&file)? };
        let text = std::str::from_utf8(&mmap).map_err(|_| LoadError::NotUtf8)?;
        let parsed = Self::parse(text)?;
        debug!(
            path = %path.display(),
            input = %parsed.input.shape(),
            k = parsed.kernel.size(),
            "loaded input file"
        );
        Ok(parsed)
    }

    /// Parse the text layout. Errors name the 1-based line they occurred on.
    pub fn parse(text: &str) -> Result<InputFile> {
        let mut cursor = LineCursor::new(text);

        let header = match cursor.next() {
            Some((_, line)) if !line.is_empty() => line,
            _ => return Err(LoadError::EmptyInput),
        };
        let (n, m, k) = parse_header(&header)?;

        let input = read_rows(&mut cursor, n, m, "input matrix")?;
        let kernel = read_rows(&mut cursor, k, k, "kernel")?;

        while let Some((line, rest)) = cursor.next() {
            if !rest.is_empty() {
                return Err(LoadError::TrailingData { line });
            }
        }

        Ok(InputFile {
            input: Matrix::new(input, Shape::new(n, m))?,
            kernel: Kernel::new(kernel, k)?,
        })
    }
}

/// Iterates lines with their 1-based numbers, stripped of non-printable
/// characters and surrounding whitespace.
struct LineCursor<'a> {
    lines: Lines<'a>,
    line: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        LineCursor {
            lines: text.lines(),
            line: 0,
        }
    }

    fn next(&mut self) -> Option<(usize, String)> {
        let raw = self.lines.next()?;
        self.line += 1;
        Some((self.line, clean_line(raw)))
    }
}

/// Keep only printable ASCII (0x20..=0x7E), then trim. Tabs become spaces.
fn clean_line(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .map(|c| if c == '\t' { ' ' } else { c })
        .filter(|c| (' '..='~').contains(c))
        .collect();
    kept.trim().to_string()
}

fn parse_header(line: &str) -> Result<(usize, usize, usize)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(LoadError::MalformedHeader(format!(
            "expected 3 fields, got {}",
            fields.len()
        )));
    }

    let mut dims = [0usize; 3];
    for (dim, field) in dims.iter_mut().zip(&fields) {
        *dim = field
            .parse()
            .map_err(|_| LoadError::MalformedHeader(format!("'{}' is not a size", field)))?;
    }
    let [n, m, k] = dims;

    if k == 0 {
        return Err(LoadError::MalformedHeader(
            "kernel size K must be >= 1".to_string(),
        ));
    }
    if n.checked_mul(m).is_none() || k.checked_mul(k).is_none() {
        return Err(LoadError::MalformedHeader(format!(
            "dimensions {} {} {} are too large",
            n, m, k
        )));
    }
    Ok((n, m, k))
}

fn read_rows(
    cursor: &mut LineCursor<'_>,
    rows: usize,
    cols: usize,
    what: &'static str,
) -> Result<Vec<i32>> {
    let mut data = Vec::new();
    for _ in 0..rows {
        let (line, text) = match cursor.next() {
            Some((line, text)) if !text.is_empty() => (line, text),
            Some((line, _)) => return Err(LoadError::MissingLine { line, what }),
            None => {
                return Err(LoadError::MissingLine {
                    line: cursor.line + 1,
                    what,
                })
            }
        };

        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != cols {
            return Err(LoadError::RowLength {
                line,
                expected: cols,
                got: tokens.len(),
            });
        }
        for token in tokens {
            let value = token.parse::<i32>().map_err(|_| LoadError::InvalidValue {
                line,
                token: token.to_string(),
            })?;
            data.push(value);
        }
    }
    Ok(data)
}
