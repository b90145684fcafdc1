//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for nook using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive search, list and map (default)
//! - **list**: Print spots matching a neighborhood query
//! - **show**: Print the detail view of one spot
//! - **config**: Inspect or initialize the config file
//!
//! # Examples
//!
//! ```
//! use nook::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["nook", "list", "campus"]);
//! match cli.get_command() {
//!     Commands::List { query, .. } => assert_eq!(query.as_deref(), Some("campus")),
//!     _ => unreachable!(),
//! }
//! ```

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for the list command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON array of rows
    Json,
    /// CSV with a header row
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "nook")]
#[command(version, about = "Find a good spot to get freelance work done", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial neighborhood search text
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },

    /// Print spots whose neighborhood contains QUERY (all spots if omitted)
    #[command(visible_alias = "l")]
    List {
        /// Neighborhood search text, case-insensitive
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show details for the spot with the given name
    Show {
        /// Spot name, case-insensitive
        #[arg(value_name = "NAME", num_args = 1.., required = true)]
        name: Vec<String>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to browse with no query
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Browse { query: None })
    }
}

impl Commands {
    /// Spot name for `show`, with words re-joined
    #[must_use]
    pub fn get_show_name(&self) -> Option<String> {
        match self {
            Self::Show { name } => Some(name.join(" ")),
            _ => None,
        }
    }
}
