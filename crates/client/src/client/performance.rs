//! Raw performance-chart operations.

use serde_json::Value;

use super::{require_id, CatchpointClient, ChartParams};
use crate::error::Result;
use crate::time::{resolve_window, TimeSpec};

impl CatchpointClient {
    /// Fetch raw time-series performance data for one test over a window.
    ///
    /// The window is either two absolute timestamps or a negative number of
    /// minutes paired with [`TimeSpec::Now`]; `tz` names a tz database
    /// timezone for relative resolution and defaults to UTC.
    pub async fn raw(
        &self,
        testid: &str,
        start: TimeSpec,
        end: TimeSpec,
        tz: Option<&str>,
    ) -> Result<Value> {
        let testid = require_id("testid", testid)?;
        let (start_time, end_time) = resolve_window(&start, &end, tz)?;
        let params = ChartParams {
            start_time: Some(start_time),
            end_time: Some(end_time),
            tests: None,
        };
        self.get_query(
            &format!("performance/raw/{}", urlencoding::encode(testid)),
            &params,
        )
        .await
    }
}
