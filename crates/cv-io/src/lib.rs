//! `cv-io` - File collaborators around the convolution engine.
//!
//! - `InputFile`: parses the `N M K` text layout into a matrix and kernel
//! - `write_matrix`: serializes an output matrix, one row per line
//! - `MatrixGenerator`: seeded random matrices for benchmarks

pub mod error;
pub mod generate;
pub mod reader;
pub mod writer;

pub use error::{LoadError, Result};
pub use generate::MatrixGenerator;
pub use reader::InputFile;
pub use writer::{write_input, write_input_to, write_matrix, write_matrix_to};
