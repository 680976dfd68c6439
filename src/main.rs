//! iconpack CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the conversion against
//! `logo.png` in the working directory, and exit with the matching status.
//! For programmatic use, prefer the library API (`iconpack::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
