use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("length mismatch for {what}: expected {expected}, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl ConvError {
    /// True for every error raised by argument validation, i.e. anything
    /// rejected before a worker starts.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ConvError::InvalidArgument(_) | ConvError::LengthMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ConvError>;
