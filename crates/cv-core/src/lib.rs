//! `cv-core` - 2D integer convolution engine.
//!
//! This crate provides:
//! - `Matrix` and `Kernel` types over row-major `i32` data
//! - A `ConvolutionBackend` trait for interchangeable execution strategies
//! - A single-threaded `SequentialBackend` used as the reference result
//! - A `ParallelBackend` that partitions output rows across a fixed-size pool
//! - The row partitioner and the zero-extension tap window both backends share

pub mod backend;
pub mod cpu;
pub mod error;
pub mod matrix;
pub mod shape;

// Re-export primary types at the crate root for convenience.
pub use backend::ConvolutionBackend;
pub use cpu::{partition_rows, select_backend, ParallelBackend, RowRange, SequentialBackend};
pub use error::{ConvError, Result};
pub use matrix::{Kernel, Matrix};
pub use shape::Shape;
