//! Encode command: write the zero-padded binary batch only.

use std::path::PathBuf;

use clap::Args;
use tracing::info;
use vla_smiles_core::{encode, read_batch, ArtifactWriter, VlaResult};

use super::load_config;
use crate::error::{report_error, CliExitCode};

/// Arguments for the encode command.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file with one SMILES string per line
    pub input: PathBuf,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory receiving the binary batch (overrides the configuration)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print the encoded rows to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

/// Execute the encode command.
pub fn handle_encode(args: EncodeArgs) -> CliExitCode {
    match run(args) {
        Ok(()) => CliExitCode::Success,
        Err(e) => report_error(&e),
    }
}

fn run(args: EncodeArgs) -> VlaResult<()> {
    let config = load_config(args.config.as_deref(), args.output_dir)?;
    let batch = read_batch(&args.input)?;
    let encoded = encode(&batch)?;

    if args.stdout {
        print!("{}", encoded.to_artifact());
        return Ok(());
    }

    let path = ArtifactWriter::new(config.artifacts)?.write_binary(&encoded)?;
    info!(path = %path.display(), "Encoded batch written");
    println!(
        "Encoded {} SMILES (L = {}) to {}",
        encoded.len(),
        encoded.sequence_length(),
        path.display()
    );
    Ok(())
}
