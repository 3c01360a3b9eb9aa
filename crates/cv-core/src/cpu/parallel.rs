use std::mem;

use tracing::{debug, trace};

use crate::backend::{check_dims, ConvolutionBackend};
use crate::error::{ConvError, Result};

use super::partition::{partition_rows, RowRange};
use super::worker::ConvolutionWorker;

/// Row-partitioned parallel backend.
///
/// Each call partitions the output rows into `threads` ranges, builds a
/// fresh rayon pool of exactly `threads` workers, runs one
/// [`ConvolutionWorker`] per range inside `ThreadPool::scope`, and drops the
/// pool before returning. `scope` only returns once every spawned task has
/// finished, so all writes to the output are visible to the caller.
#[derive(Debug, Clone)]
pub struct ParallelBackend {
    threads: usize,
}

impl ParallelBackend {
    /// # Errors
    /// `InvalidArgument` if `threads == 0`.
    pub fn new(threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(ConvError::InvalidArgument(
                "thread count must be >= 1".to_string(),
            ));
        }
        Ok(ParallelBackend { threads })
    }

    fn build_pool(&self) -> Result<rayon::ThreadPool> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|idx| format!("cv-worker-{idx}"))
            .build()?;
        Ok(pool)
    }
}

impl ConvolutionBackend for ParallelBackend {
    fn name(&self) -> &str {
        "parallel"
    }

    fn threads(&self) -> usize {
        self.threads
    }

    fn convolve_into(
        &self,
        input: &[i32],
        kernel: &[i32],
        output: &mut [i32],
        n: usize,
        m: usize,
        k: usize,
    ) -> Result<()> {
        check_dims(input, kernel, output, n, m, k)?;
        let ranges = partition_rows(n, self.threads)?;
        let pool = self.build_pool()?;
        debug!(threads = self.threads, rows = n, cols = m, k, "dispatching row ranges");

        let worker = ConvolutionWorker::new(input, kernel, n, m, k);
        let slices = split_rows(output, &ranges, m);

        pool.scope(|s| {
            for (idx, (range, rows_out)) in ranges.iter().zip(slices).enumerate() {
                let worker = &worker;
                s.spawn(move |_| {
                    trace!(worker = idx, start = range.start, end = range.end, "worker started");
                    worker.run(*range, rows_out);
                });
            }
        });

        debug!(threads = self.threads, "all workers finished");
        Ok(())
    }
}

/// Carve `output` into one disjoint mutable slice per range, in order.
fn split_rows<'a>(mut rest: &'a mut [i32], ranges: &[RowRange], m: usize) -> Vec<&'a mut [i32]> {
    let mut slices = Vec::with_capacity(ranges.len());
    for range in ranges {
        let (head, tail) = mem::take(&mut rest).split_at_mut(range.len() * m);
        slices.push(head);
        rest = tail;
    }
    slices
}
