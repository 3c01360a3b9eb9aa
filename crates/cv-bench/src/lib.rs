//! `cv-bench` - Throughput comparison of the sequential and parallel
//! convolution backends.
//!
//! Runs a sweep over matrix sizes, kernel sizes, and thread counts, timing
//! each call and streaming the results to a CSV report.

pub mod config;
pub mod error;
pub mod report;
pub mod runner;

pub use config::{parse_size, BenchConfig};
pub use error::{BenchError, Result};
pub use report::{table_header, BenchRecord, CsvReport, CSV_HEADER};
pub use runner::run_sweep;
