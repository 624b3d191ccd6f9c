//! Divisors command: report L and the group sizes a conversion would use.

use std::path::PathBuf;

use clap::Args;
use serde_json::json;
use vla_smiles_core::{divisors, encode, read_batch, VlaResult};

use crate::error::{report_error, CliExitCode};

/// Arguments for the divisors command.
#[derive(Args, Debug)]
pub struct DivisorsArgs {
    /// Input file with one SMILES string per line
    pub input: PathBuf,

    /// Output as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

/// Execute the divisors command.
pub fn handle_divisors(args: DivisorsArgs) -> CliExitCode {
    match run(&args) {
        Ok((length, ks)) => {
            if args.json {
                let out = json!({
                    "sequence_length": length,
                    "divisors": ks,
                });
                println!("{}", out);
            } else {
                let list: Vec<String> = ks.iter().map(usize::to_string).collect();
                println!("sequence_length: {}", length);
                println!("divisors: {}", list.join(" "));
            }
            CliExitCode::Success
        }
        Err(e) => report_error(&e),
    }
}

fn run(args: &DivisorsArgs) -> VlaResult<(usize, Vec<usize>)> {
    let batch = read_batch(&args.input)?;
    let length = encode(&batch)?.sequence_length();
    Ok((length, divisors(length)?))
}
