use clap::Parser;
use std::process::ExitCode;

use anyhow::{Context, Result};

use svglist::cli::{self, logging, Args, CliConfig};

fn main() -> ExitCode {
    let args = Args::parse();

    logging::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            cli::handle_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = CliConfig::from_args(args).context("Invalid arguments")?;

    let outcome = config.execute().with_context(|| {
        format!(
            "Failed to list {}",
            config.listing_config.directory.display()
        )
    })?;

    // Only a stale list under --check fails; a missing directory exits 0.
    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
