use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use cv_core::Shape;

use crate::error::Result;

/// CSV header, written verbatim as the first line of every report.
pub const CSV_HEADER: &str = "MatrixSize,KernelSize,Threads,ExecutionTime(ms)";

/// One timed convolution call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchRecord {
    pub shape: Shape,
    pub kernel_size: usize,
    pub threads: usize,
    pub elapsed: Duration,
}

impl BenchRecord {
    /// Elapsed wall-clock time in whole milliseconds, truncated.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{}",
            self.shape,
            self.kernel_size,
            self.threads,
            self.elapsed_ms()
        )
    }

    /// Fixed-width row for the console table, aligned with [`table_header`].
    pub fn table_row(&self) -> String {
        format!(
            "{:<15} {:<12} {:<10} {:<10}",
            self.shape.to_string(),
            self.kernel_size,
            self.threads,
            self.elapsed_ms()
        )
    }
}

pub fn table_header() -> String {
    format!(
        "{:<15} {:<12} {:<10} {:<10}",
        "Matrix Size", "Kernel Size", "Threads", "Execution Time (ms)"
    )
}

/// Streams benchmark records as CSV.
pub struct CsvReport<W: Write> {
    writer: W,
}

impl CsvReport<BufWriter<File>> {
    /// Create (or truncate) the report file at `path` and write the header.
    pub fn create(path: &Path) -> Result<Self> {
        CsvReport::new(BufWriter::new(File::create(path)?))
    }
}

impl<W: Write> CsvReport<W> {
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "{}", CSV_HEADER)?;
        Ok(Self { writer })
    }

    pub fn write_record(&mut self, record: &BenchRecord) -> Result<()> {
        writeln!(self.writer, "{}", record.csv_row())?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
