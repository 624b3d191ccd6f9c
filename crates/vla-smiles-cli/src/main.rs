//! VLA-SMILES CLI
//!
//! Converts a file of SMILES strings (one per line) into VLA-SMILES
//! descriptor matrices, one per divisor of the binary sequence length.
//!
//! # Commands
//!
//! - `convert`: Encode the batch and write every VLA matrix
//! - `encode`: Write only the zero-padded binary batch
//! - `divisors`: Print the sequence length and its divisors
//!
//! If you use these descriptors, please cite: Nazarova, A.L.; Nakano, A.
//! "VLA-SMILES: Variable-Length-Array SMILES Descriptors in Neural
//! Network-Based QSAR Modeling." Mach. Learn. Knowl. Extr. 2022, 4, 715-737.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

/// VLA-SMILES - Variable-Length-Array SMILES descriptors
#[derive(Parser)]
#[command(name = "vla-smiles")]
#[command(version)]
#[command(about = "Convert SMILES files into VLA-SMILES descriptor matrices")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a SMILES file and write one VLA matrix per divisor
    ///
    /// Writes `binary_output.dat` and `vla_output_<k>.dat` for every k that
    /// divides the binary sequence length.
    Convert(commands::convert::ConvertArgs),
    /// Encode a SMILES file to zero-padded binary strings only
    Encode(commands::encode::EncodeArgs),
    /// Print the binary sequence length and its divisors
    Divisors(commands::divisors::DivisorsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Convert(args) => commands::convert::handle_convert(args),
        Commands::Encode(args) => commands::encode::handle_encode(args),
        Commands::Divisors(args) => commands::divisors::handle_divisors(args),
    };

    exit_code.into()
}
