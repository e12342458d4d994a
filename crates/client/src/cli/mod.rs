//! CLI command definitions.

pub mod favorites;
pub mod nodes;
pub mod performance;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_BASE_URL;

/// CLI client for the Catchpoint pull API.
#[derive(Debug, Parser)]
#[command(name = "catchpoint-client")]
#[command(about = "CLI client for the Catchpoint pull API", long_about = None)]
pub struct Cli {
    /// API base URL.
    #[arg(long, env = "CATCHPOINT_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// API consumer key.
    #[arg(long, env = "CATCHPOINT_CLIENT_ID")]
    pub client_id: String,

    /// API consumer secret.
    #[arg(long, env = "CATCHPOINT_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,

    /// REST API version.
    #[arg(long, default_value = "1")]
    pub api_version: u8,

    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON output.
    Json,
    /// Indented JSON output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Performance chart data.
    Performance(performance::PerformanceCommand),
    /// Favorite chart queries.
    Favorites(favorites::FavoritesCommand),
    /// Monitoring node metadata.
    Nodes(nodes::NodesCommand),
}
