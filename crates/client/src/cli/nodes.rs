//! Node CLI commands.

use clap::{Parser, Subcommand};

/// Monitoring node commands.
#[derive(Debug, Parser)]
pub struct NodesCommand {
    #[command(subcommand)]
    pub action: NodesAction,
}

/// Available node actions.
#[derive(Debug, Subcommand)]
pub enum NodesAction {
    /// List monitoring nodes.
    List,
    /// Get node by ID.
    Get {
        /// Node ID.
        node_id: String,
    },
}
