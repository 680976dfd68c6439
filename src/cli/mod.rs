//! Command Line Interface (CLI) layer for iconpack.
//!
//! `args` defines argument parsing and `runner` turns the library's structured
//! result into the console transcript and exit status. If you are embedding
//! iconpack into another application, use `iconpack::api` instead.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
