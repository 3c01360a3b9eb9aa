use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("convolution error: {0}")]
    Conv(#[from] cv_core::ConvError),
    #[error("generator error: {0}")]
    Load(#[from] cv_io::LoadError),
    #[error("invalid benchmark config: {0}")]
    InvalidConfig(String),
    #[error("{threads}-thread result differs from sequential at {size} k={kernel_size}, first mismatch at index {index}")]
    Mismatch {
        size: String,
        kernel_size: usize,
        threads: usize,
        index: usize,
    },
}

pub type Result<T> = std::result::Result<T, BenchError>;
