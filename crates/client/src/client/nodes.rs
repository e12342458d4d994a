//! Monitoring-node operations.

use serde_json::Value;

use super::{require_id, CatchpointClient};
use crate::error::Result;

impl CatchpointClient {
    /// List the monitoring nodes visible to the caller.
    pub async fn nodes(&self) -> Result<Value> {
        self.get("nodes").await
    }

    /// Fetch the detail record for one monitoring node.
    pub async fn node(&self, node_id: &str) -> Result<Value> {
        let node_id = require_id("node", node_id)?;
        self.get(&format!("nodes/{}", urlencoding::encode(node_id)))
            .await
    }
}
