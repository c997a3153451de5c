//! Decoy credential generator CLI.
//!
//! This binary delegates to `decoy_creds::cli` for the generation pipeline,
//! keeping the behaviour testable without spawning a process. Logs go to
//! standard error and are controlled with `RUST_LOG`.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use decoy_creds::cli::{Cli, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    match run(&cli, io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}
