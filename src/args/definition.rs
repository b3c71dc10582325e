//! Command-line argument definition and processing.

use clap::Parser;

use crate::app::RunOptions;
use crate::theme::Settings;

/// EchoChamber - Browse news on a topic split into positive, neutral and negative coverage
#[derive(Parser, Debug, Default)]
#[command(name = "echochamber")]
#[command(version)]
#[command(about = "Browse news on a topic split into positive, neutral and negative coverage", long_about = None)]
pub struct Args {
    /// Base URL of the articles backend (overrides `api_base_url` in settings.conf)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Open the search screen and search for this topic right away
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Run without a terminal UI; with --search, logs the result counts and exits
    #[arg(long)]
    pub headless: bool,
}

/// What: Merge command-line flags over loaded settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Values from `settings.conf` (or defaults)
///
/// Output:
/// - `RunOptions` for [`crate::app::run`].
///
/// Details:
/// - `--api-url` wins over the settings file; a trailing `/` is dropped.
#[must_use]
pub fn run_options(args: &Args, mut settings: Settings) -> RunOptions {
    if let Some(url) = args.api_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        tracing::info!(url = %url, "API base URL overridden from CLI");
        settings.api_base_url = url.trim_end_matches('/').to_string();
    }
    RunOptions {
        settings,
        headless: args.headless,
        initial_query: args.search.clone(),
    }
}
