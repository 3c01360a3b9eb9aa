use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use cv_bench::{run_sweep, table_header, BenchConfig, CsvReport};
use cv_core::{select_backend, Shape};
use cv_io::{write_input, write_matrix, InputFile, MatrixGenerator};

/// Convolve one input file.
#[derive(Args, Debug)]
pub struct RunCommand {
    /// Worker threads; 1 runs the sequential backend
    #[arg(short = 'p', long)]
    pub threads: usize,

    /// Input file: "N M K", then N rows of F, then K rows of C
    #[arg(short, long, default_value = "date.txt")]
    pub input: PathBuf,

    /// Output file, one row of V per line
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,
}

impl RunCommand {
    pub fn execute(&self) -> Result<()> {
        let backend = select_backend(self.threads).context("invalid thread count")?;

        let file = InputFile::open(&self.input)
            .with_context(|| format!("failed to load {}", self.input.display()))?;

        let start = Instant::now();
        let output = file
            .input
            .convolve(&file.kernel, backend.as_ref())
            .context("convolution failed")?;
        let elapsed = start.elapsed();

        info!(
            size = %file.input.shape(),
            k = file.kernel.size(),
            backend = backend.name(),
            threads = backend.threads(),
            "convolution finished"
        );
        println!("Time: {} ms", elapsed.as_millis());

        write_matrix(&self.output, &output)
            .with_context(|| format!("failed to write {}", self.output.display()))?;
        info!(path = %self.output.display(), "wrote output");
        Ok(())
    }
}

/// Benchmark sweep options. Omitted lists fall back to the defaults.
#[derive(Args, Debug)]
pub struct BenchCommand {
    /// CSV report path
    #[arg(short, long, default_value = "performance.csv")]
    pub output: PathBuf,

    /// Matrix sizes as ROWSxCOLS, comma separated
    #[arg(long, value_delimiter = ',', value_parser = parse_shape)]
    pub sizes: Option<Vec<Shape>>,

    /// Kernel sizes, comma separated
    #[arg(long, value_delimiter = ',')]
    pub kernels: Option<Vec<usize>>,

    /// Thread counts, comma separated
    #[arg(long, value_delimiter = ',')]
    pub threads: Option<Vec<usize>>,

    /// Seed for the random matrices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Check every parallel result against the sequential backend
    #[arg(long)]
    pub verify: bool,
}

impl BenchCommand {
    pub fn config(&self) -> BenchConfig {
        let defaults = BenchConfig::default();
        BenchConfig {
            matrix_sizes: self.sizes.clone().unwrap_or(defaults.matrix_sizes),
            kernel_sizes: self.kernels.clone().unwrap_or(defaults.kernel_sizes),
            thread_counts: self.threads.clone().unwrap_or(defaults.thread_counts),
            seed: self.seed,
            verify: self.verify,
        }
    }

    pub fn execute(&self) -> Result<()> {
        let config = self.config();
        config.validate().context("invalid benchmark options")?;

        let mut report = CsvReport::create(&self.output)
            .with_context(|| format!("failed to create {}", self.output.display()))?;

        println!("{}", table_header());
        run_sweep(&config, |record| {
            println!("{}", record.table_row());
            report.write_record(record)
        })
        .context("benchmark sweep failed")?;

        report.finish().context("failed to flush report")?;
        info!(path = %self.output.display(), "wrote benchmark report");
        Ok(())
    }
}

/// Write a random input file.
#[derive(Args, Debug)]
pub struct GenerateCommand {
    #[arg(short = 'n', long)]
    pub rows: usize,

    #[arg(short = 'm', long)]
    pub cols: usize,

    /// Kernel side length K
    #[arg(short, long, default_value_t = 3)]
    pub kernel: usize,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, default_value = "date.txt")]
    pub output: PathBuf,
}

impl GenerateCommand {
    pub fn execute(&self) -> Result<()> {
        let mut generator = MatrixGenerator::new(self.seed);
        let input = generator.matrix(self.rows, self.cols);
        let kernel = generator.kernel(self.kernel).context("invalid kernel size")?;

        write_input(&self.output, &input, &kernel)
            .with_context(|| format!("failed to write {}", self.output.display()))?;
        info!(
            path = %self.output.display(),
            size = %input.shape(),
            k = self.kernel,
            "wrote input file"
        );
        Ok(())
    }
}

fn parse_shape(s: &str) -> std::result::Result<Shape, String> {
    cv_bench::parse_size(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_then_run_matches_sequential() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("date.txt");

        GenerateCommand {
            rows: 9,
            cols: 6,
            kernel: 3,
            seed: Some(11),
            output: input.clone(),
        }
        .execute()
        .unwrap();

        let seq_out = dir.path().join("seq.txt");
        let par_out = dir.path().join("par.txt");
        for (threads, output) in [(1, &seq_out), (4, &par_out)] {
            RunCommand {
                threads,
                input: input.clone(),
                output: output.clone(),
            }
            .execute()
            .unwrap();
        }

        let seq = std::fs::read_to_string(&seq_out).unwrap();
        let par = std::fs::read_to_string(&par_out).unwrap();
        assert_eq!(seq.lines().count(), 9);
        assert_eq!(seq, par);
    }

    #[test]
    fn test_run_rejects_zero_threads() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = RunCommand {
            threads: 0,
            input: dir.path().join("missing.txt"),
            output: dir.path().join("out.txt"),
        };
        assert!(cmd.execute().is_err());
        assert!(!dir.path().join("out.txt").exists());
    }

    #[test]
    fn test_run_malformed_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.txt");
        std::fs::write(&input, "2 2 1\n1 2\n3\n1\n").unwrap();
        let cmd = RunCommand {
            threads: 2,
            input,
            output: dir.path().join("out.txt"),
        };
        assert!(cmd.execute().is_err());
        assert!(!dir.path().join("out.txt").exists());
    }

    #[test]
    fn test_bench_config_defaults_and_overrides() {
        let cmd = BenchCommand {
            output: PathBuf::from("performance.csv"),
            sizes: Some(vec![Shape::new(4, 4)]),
            kernels: None,
            threads: Some(vec![1, 3]),
            seed: Some(5),
            verify: true,
        };
        let config = cmd.config();
        assert_eq!(config.matrix_sizes, vec![Shape::new(4, 4)]);
        assert_eq!(config.kernel_sizes, vec![3, 5]);
        assert_eq!(config.thread_counts, vec![1, 3]);
        assert!(config.verify);
    }

    #[test]
    fn test_bench_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("performance.csv");
        BenchCommand {
            output: output.clone(),
            sizes: Some(vec![Shape::new(6, 6)]),
            kernels: Some(vec![3]),
            threads: Some(vec![1, 2]),
            seed: Some(9),
            verify: true,
        }
        .execute()
        .unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "MatrixSize,KernelSize,Threads,ExecutionTime(ms)");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("6x6,3,1,"));
        assert!(lines[2].starts_with("6x6,3,2,"));
    }

    #[test]
    fn test_parse_shape() {
        assert_eq!(parse_shape("10x20").unwrap(), Shape::new(10, 20));
        assert!(parse_shape("10-20").is_err());
    }
}
