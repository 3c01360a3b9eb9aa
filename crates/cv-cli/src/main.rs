//! `convolve` - run, benchmark, and generate inputs for the 2D convolution
//! engine.
//!
//! ```bash
//! # Convolve date.txt with 4 worker threads, writing output.txt
//! convolve run --threads 4
//!
//! # Sequential vs. parallel sweep, written to performance.csv
//! convolve bench --sizes 10x10,100x100 --kernels 3,5 --threads 1,2,4,8 --verify
//!
//! # Random 1000x1000 input with a 5x5 kernel
//! convolve generate --rows 1000 --cols 1000 --kernel 5 --output date.txt
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BenchCommand, GenerateCommand, RunCommand};

/// 2D integer convolution with sequential and row-partitioned parallel backends
#[derive(Parser, Debug)]
#[command(name = "convolve")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convolve an input file and write the result
    Run(RunCommand),
    /// Time every size x kernel x thread-count combination
    #[command(alias = "test")]
    Bench(BenchCommand),
    /// Write a random input file
    Generate(GenerateCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Run(cmd) => cmd.execute(),
        Commands::Bench(cmd) => cmd.execute(),
        Commands::Generate(cmd) => cmd.execute(),
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
