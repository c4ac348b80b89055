//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;

use crate::error::{ListingError, ListingResult};
use crate::listing::config::{DEFAULT_DIRECTORY, DEFAULT_OUTPUT, DEFAULT_SUFFIX};
use crate::listing::{ListingConfig, ListingEngine, ListingOutcome};

pub mod logging;

/// Main CLI arguments
///
/// Every option has a default, so running without arguments lists
/// `mathworld_svgs/` into `mathworld_svgs_list.json`.
#[derive(Parser, Debug, Clone)]
#[command(name = "svglist")]
#[command(about = "Write a sorted JSON list of the SVG files in a directory")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Directory to scan (non-recursive)
    #[arg(short, long, default_value = DEFAULT_DIRECTORY)]
    pub dir: PathBuf,

    /// Output JSON file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Keep only entries whose name ends with this suffix
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Spaces per indentation level (0-8, default: 2)
    #[arg(long)]
    pub indent: Option<u8>,

    /// Write non-ASCII characters in names as UTF-8 instead of \uXXXX escapes
    #[arg(long)]
    pub no_ensure_ascii: bool,

    /// Compare the output file with a fresh scan instead of writing it
    #[arg(long)]
    pub check: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress status output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub listing_config: ListingConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ListingResult<Self> {
        let listing_config = Self::create_listing_config(&args)?;

        Ok(Self {
            args,
            listing_config,
        })
    }

    /// Create listing configuration from CLI arguments
    fn create_listing_config(args: &Args) -> ListingResult<ListingConfig> {
        let config = ListingConfig::new()
            .with_directory(args.dir.clone())
            .with_output(args.output.clone())
            .with_suffix(args.suffix.clone())
            .with_indent_size(args.indent.unwrap_or(2))
            .map_err(ListingError::configuration)?
            .with_ensure_ascii(!args.no_ensure_ascii);

        config.validate().map_err(ListingError::configuration)?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if only a comparison is requested
    pub fn is_check(&self) -> bool {
        self.args.check
    }

    /// Run the configured listing and print its status line
    pub fn execute(&self) -> ListingResult<ListingOutcome> {
        let engine = ListingEngine::new(self.listing_config.clone())?;
        let outcome = if self.is_check() {
            engine.check()?
        } else {
            engine.generate()?
        };

        if !self.is_quiet() {
            println!("{}", outcome.status_line(&self.listing_config.kind_label()));
        }
        Ok(outcome)
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &anyhow::Error) {
    tracing::debug!("{:?}", error);

    match error.downcast_ref::<ListingError>() {
        Some(listing_error) => {
            eprintln!("✗ {}: {}", error, listing_error.user_message());
            if matches!(listing_error, ListingError::Configuration { .. }) {
                eprintln!("\nTry 'svglist --help' for usage information.");
            }
        }
        None => eprintln!("✗ {:#}", error),
    }
}
