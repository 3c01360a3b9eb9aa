use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input file is empty")]
    EmptyInput,
    #[error("input file is not valid UTF-8")]
    NotUtf8,
    #[error("line 1: malformed header, expected \"N M K\": {0}")]
    MalformedHeader(String),
    #[error("line {line}: missing or blank line while reading {what}")]
    MissingLine { line: usize, what: &'static str },
    #[error("line {line}: expected {expected} elements, got {got}")]
    RowLength {
        line: usize,
        expected: usize,
        got: usize,
    },
    #[error("line {line}: invalid integer '{token}'")]
    InvalidValue { line: usize, token: String },
    #[error("line {line}: unexpected trailing data")]
    TrailingData { line: usize },
    #[error("matrix error: {0}")]
    Matrix(#[from] cv_core::ConvError),
}

pub type Result<T> = std::result::Result<T, LoadError>;
