//! Favorite-chart CLI commands.

use clap::{Parser, Subcommand};

use crate::time::TimeSpec;

/// Favorite chart commands.
#[derive(Debug, Parser)]
pub struct FavoritesCommand {
    #[command(subcommand)]
    pub action: FavoritesAction,
}

/// Available favorite actions.
#[derive(Debug, Subcommand)]
pub enum FavoritesAction {
    /// List saved favorite charts.
    List,
    /// Get the configuration of a favorite chart.
    Details {
        /// Favorite chart ID.
        favid: String,
    },
    /// Fetch chart data for a favorite.
    Data {
        /// Favorite chart ID.
        favid: String,
        /// Window start override; requires --end.
        #[arg(long, allow_negative_numbers = true, requires = "end")]
        start: Option<TimeSpec>,
        /// Window end override; requires --start.
        #[arg(long, requires = "start")]
        end: Option<TimeSpec>,
        /// tz database timezone name (default UTC).
        #[arg(long)]
        tz: Option<String>,
        /// Comma-separated test IDs to restrict the chart to.
        #[arg(long)]
        tests: Option<String>,
    },
}
