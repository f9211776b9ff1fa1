//! mpags-cipher: encrypt or decrypt text with classical ciphers

use clap::Parser;
use mpags_cli::commands::ProcessArgs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = ProcessArgs::parse();

    match args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
