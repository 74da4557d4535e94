//! Estimar CLI - LLM inference throughput estimation
//!
//! # Commands
//!
//! - `estimate` - One-shot throughput estimate from flags
//! - `interactive` - Line-oriented estimation session
//! - `modes` - Show the quantization factor table

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use estimar::cli::{handle_estimate, handle_modes, run_interactive};
use estimar::quantize::QuantizationMode;
use estimar::report::OutputFormat;

/// Estimar - LLM inference throughput estimator
///
/// Estimates tokens/sec for bandwidth-bound LLM decoding from model size,
/// quantization mode and GPU memory bandwidth.
#[derive(Parser)]
#[command(name = "estimar")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One-shot throughput estimate
    ///
    /// Examples:
    ///   estimar estimate --params 13 --bandwidth 600
    ///   estimar estimate --params 70 --bandwidth 1935 --quant fp16 --format json
    Estimate {
        /// Model parameter count in billions
        #[arg(short, long, default_value = "13.0")]
        params: String,

        /// GPU memory bandwidth in GB/s
        #[arg(short, long, default_value = "600.0")]
        bandwidth: String,

        /// Weight quantization mode
        #[arg(short, long, value_enum, default_value = "fp8")]
        quant: QuantizationMode,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Interactive estimation session (edit fields, see results reactively)
    Interactive,

    /// Show the quantization factor table
    Modes,
}

fn run(cli: Cli) -> estimar::error::Result<()> {
    match cli.command {
        Commands::Estimate {
            params,
            bandwidth,
            quant,
            format,
        } => {
            let report = handle_estimate(&params, &bandwidth, quant, format)?;
            println!("{report}");
            Ok(())
        },
        Commands::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_interactive(stdin.lock(), stdout.lock())
        },
        Commands::Modes => {
            println!("{}", handle_modes());
            Ok(())
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        let _ = writeln!(io::stderr(), "error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
