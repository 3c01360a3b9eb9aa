use std::time::Instant;

use tracing::{debug, info};

use cv_core::{select_backend, Matrix, SequentialBackend};
use cv_io::MatrixGenerator;

use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::report::BenchRecord;

/// Run the full sweep described by `config`.
///
/// For each matrix size and kernel size a fresh `F` and `C` are generated,
/// then one timed convolution is made per thread count. `on_record` sees
/// each record as soon as it is measured; an error from it stops the sweep.
pub fn run_sweep<F>(config: &BenchConfig, mut on_record: F) -> Result<Vec<BenchRecord>>
where
    F: FnMut(&BenchRecord) -> Result<()>,
{
    config.validate()?;
    info!(runs = config.total_runs(), verify = config.verify, "starting benchmark sweep");

    let mut generator = MatrixGenerator::new(config.seed);
    let mut records = Vec::with_capacity(config.total_runs());

    for &shape in &config.matrix_sizes {
        for &k in &config.kernel_sizes {
            let input = generator.matrix(shape.rows(), shape.cols());
            let kernel = generator.kernel(k)?;

            let reference = if config.verify {
                Some(input.convolve(&kernel, &SequentialBackend::new())?)
            } else {
                None
            };

            for &threads in &config.thread_counts {
                let backend = select_backend(threads)?;

                let start = Instant::now();
                let output = input.convolve(&kernel, backend.as_ref())?;
                let elapsed = start.elapsed();

                if let Some(reference) = &reference {
                    check_parity(reference, &output, &shape.to_string(), k, threads)?;
                }

                let record = BenchRecord {
                    shape,
                    kernel_size: k,
                    threads,
                    elapsed,
                };
                debug!(
                    size = %shape,
                    k,
                    threads,
                    backend = backend.name(),
                    ms = record.elapsed_ms() as u64,
                    "timed convolution"
                );
                on_record(&record)?;
                records.push(record);
            }
        }
    }

    info!(runs = records.len(), "benchmark sweep finished");
    Ok(records)
}

fn check_parity(
    reference: &Matrix,
    output: &Matrix,
    size: &str,
    kernel_size: usize,
    threads: usize,
) -> Result<()> {
    let mismatch = reference
        .data()
        .iter()
        .zip(output.data())
        .position(|(a, b)| a != b);
    match mismatch {
        Some(index) => Err(BenchError::Mismatch {
            size: size.to_string(),
            kernel_size,
            threads,
            index,
        }),
        None => Ok(()),
    }
}
