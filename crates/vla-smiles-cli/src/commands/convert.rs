//! Convert command: SMILES file → binary batch → VLA matrices.
//!
//! # Usage
//!
//! ```bash
//! # Writes binary_output.dat and vla_output_<k>.dat into the current directory
//! vla-smiles convert input.dat
//!
//! # Parallel, into a dedicated directory, with a JSON report on stdout
//! vla-smiles convert input.dat --output-dir descriptors --parallel --json
//! ```

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use serde::Serialize;
use tracing::info;
use vla_smiles_core::{read_batch, ArtifactWriter, VlaError, VlaPipeline, VlaResult};

use super::load_config;
use crate::error::{report_error, CliExitCode};

/// Arguments for the convert command.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input file with one SMILES string per line
    pub input: PathBuf,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory receiving the artifacts (overrides the configuration)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Compute matrices for distinct divisors in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Do not write the encoded binary batch
    #[arg(long)]
    pub no_binary: bool,

    /// Print a JSON run report to stdout
    #[arg(long)]
    pub json: bool,
}

/// Summary of a conversion run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub rows: usize,
    pub sequence_length: usize,
    pub divisors: Vec<usize>,
    pub output_dir: PathBuf,
    pub artifacts: Vec<PathBuf>,
    pub elapsed_ms: u64,
}

/// Execute the convert command.
pub fn handle_convert(args: ConvertArgs) -> CliExitCode {
    let json = args.json;
    match run(args) {
        Ok(report) => {
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(out) => println!("{}", out),
                    Err(e) => return report_error(&VlaError::from(e)),
                }
            } else {
                println!(
                    "Converted {} SMILES (L = {}) into {} VLA matrices in {}",
                    report.rows,
                    report.sequence_length,
                    report.divisors.len(),
                    report.output_dir.display()
                );
            }
            CliExitCode::Success
        }
        Err(e) => report_error(&e),
    }
}

fn run(args: ConvertArgs) -> VlaResult<RunReport> {
    let start = Instant::now();

    let mut config = load_config(args.config.as_deref(), args.output_dir)?;
    config.pipeline.parallel |= args.parallel;
    if args.no_binary {
        config.artifacts.write_binary = false;
    }
    let writer = ArtifactWriter::new(config.artifacts)?;

    let batch = read_batch(&args.input)?;
    info!(input = %args.input.display(), rows = batch.len(), "Converting SMILES batch");

    // Nothing is written unless every matrix was computed.
    let output = VlaPipeline::new(config.pipeline).run(&batch)?;
    let artifacts = writer.write_output(&output)?;

    Ok(RunReport {
        input: args.input,
        rows: output.encoded.len(),
        sequence_length: output.encoded.sequence_length(),
        divisors: output.divisors(),
        output_dir: writer.config().output_dir.clone(),
        artifacts,
        elapsed_ms: start.elapsed().as_millis() as u64,
    })
}
