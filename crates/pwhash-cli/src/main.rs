//! pwhash CLI - Encode a password the way Halo stores it
//!
//! Prompts for a password on standard input and prints its Argon2id encoding
//! using Spring Security 5.8 parameters.

mod cli;
mod constants;
mod errors;
mod helpers;

use std::time::Instant;

use clap::Parser;
use log::debug;
use pwhash_core::PasswordEncoder;

use crate::cli::Cli;
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();

    pretty_env_logger::formatted_builder()
        .filter_level(cli.log_level.into())
        .init();

    if let Err(e) = run() {
        if let Some(cli_err) = e.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let encoder = PasswordEncoder::spring_v5_8();
    debug!("Encoder parameters: {:?}", encoder.params());

    let started = Instant::now();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    helpers::run(&encoder, &mut stdin.lock(), &mut stdout.lock())?;
    debug!("Finished in {:?}", started.elapsed());
    Ok(())
}
