//! CLI definitions for signup.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Signup CLI.
#[derive(Parser)]
#[command(name = "signup")]
#[command(about = "Extracurricular activity signup service")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path [default: config/default.toml]
    #[arg(short, long, env = "SIGNUP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the server in foreground (default)
    Run {
        /// Server host (overrides config)
        #[arg(long, env = "SIGNUP_HOST")]
        host: Option<String>,

        /// Server port (overrides config)
        #[arg(long, env = "SIGNUP_PORT")]
        port: Option<u16>,
    },

    /// Print the seed activities
    Activities {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Validate the configuration file
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}
