//! Nook CLI application entry point
//!
//! Browse a small catalog of freelance work spots by neighborhood, either
//! interactively in the terminal or through plain listing commands.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! nook
//! nook browse campus
//!
//! # Print spots whose neighborhood contains a query
//! nook list "san marcos"
//! nook list --format json
//!
//! # Print one spot with its map region
//! nook show flowers hall
//!
//! # Configuration
//! nook config show
//! nook config init
//!
//! # Quiet mode (only output results)
//! nook -q list tx
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/nook/config.toml` on Linux). A missing file means defaults.

use colored::Colorize;
use flexi_logger::LoggerHandle;
use nook::{
    Catalog, NookError,
    cli::{Cli, Commands},
    commands,
    config::NookConfig,
    logging,
    ui::{BrowserConfig, RatatuiBrowser},
};
use std::io::{self, Write};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, NookError>;

/// Start file logging, warning on stderr if that fails
fn start_logging(config: &NookConfig) -> Option<LoggerHandle> {
    let result = logging::default_log_dir()
        .and_then(|dir| logging::init_logging(&config.log_level, &dir));
    match result {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("{} logging disabled: {e}", "Warning:".yellow());
            None
        }
    }
}

/// Load configuration, start logging, and dispatch to the command handler
///
/// The logger handle is stored in `logger` so the caller can still log the
/// returned error before the handle is dropped.
///
/// # Errors
///
/// Returns `NookError` if configuration loading fails or the command fails.
fn run(cli: &Cli, logger: &mut Option<LoggerHandle>) -> Result<()> {
    let command = cli.get_command();
    let config_path = NookConfig::config_path()?;

    // A broken config file must not block `config path` or `config init --force`
    let config = match (NookConfig::load_from(&config_path), &command) {
        (Ok(config), _) => config,
        (Err(e), Commands::Config { .. }) => {
            eprintln!("{} {e}", "Warning:".yellow());
            NookConfig::default()
        }
        (Err(e), _) => return Err(e.into()),
    };

    *logger = start_logging(&config);
    log::info!("command dispatched: {command:?}");

    let quiet = cli.quiet || config.quiet;
    let catalog = Catalog::builtin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &command {
        Commands::Browse { query } => {
            let browser_config = BrowserConfig::from_config(&config, query.clone());
            commands::browse(&RatatuiBrowser::new(), &catalog, &browser_config, quiet, &mut out)?;
        }
        Commands::List { query, format } => {
            commands::list(&catalog, query.as_deref(), *format, quiet, &mut out)?;
        }
        Commands::Show { .. } => {
            let name = command.get_show_name().unwrap_or_default();
            commands::show(&catalog, &name, config.detail_span(), quiet, &mut out)?;
        }
        Commands::Config { command } => {
            commands::config(&config, command, &config_path, quiet, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let mut logger = None;

    match run(&cli, &mut logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
