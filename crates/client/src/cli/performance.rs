//! Performance CLI commands.

use clap::{Parser, Subcommand};

use crate::time::TimeSpec;

/// Performance chart commands.
#[derive(Debug, Parser)]
pub struct PerformanceCommand {
    #[command(subcommand)]
    pub action: PerformanceAction,
}

/// Available performance actions.
#[derive(Debug, Subcommand)]
pub enum PerformanceAction {
    /// Fetch raw time-series data for one test.
    Raw {
        /// Test ID.
        testid: String,
        /// Window start: "MM-DD-YYYY HH:MM", or negative minutes before now.
        #[arg(long, allow_negative_numbers = true)]
        start: TimeSpec,
        /// Window end: "MM-DD-YYYY HH:MM", or the literal "now".
        #[arg(long)]
        end: TimeSpec,
        /// tz database timezone name (default UTC).
        #[arg(long)]
        tz: Option<String>,
    },
}
