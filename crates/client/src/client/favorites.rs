//! Favorite-chart operations.

use serde_json::Value;

use super::{require_id, CatchpointClient, ChartParams};
use crate::error::{Error, Result};
use crate::time::{resolve_window, TimeSpec};

/// Optional overrides for a favorite-chart data query.
///
/// A favorite carries its own time window and test set; any field left as
/// `None` keeps the stored value. `start` and `end` must be supplied
/// together.
#[derive(Debug, Default)]
pub struct FavoriteDataQuery {
    /// Window start override.
    pub start: Option<TimeSpec>,
    /// Window end override.
    pub end: Option<TimeSpec>,
    /// tz database timezone for relative windows; defaults to UTC.
    pub tz: Option<String>,
    /// Comma-separated test ids to restrict the chart to.
    pub tests: Option<String>,
}

impl CatchpointClient {
    /// List the caller's saved favorite-chart definitions.
    pub async fn favorite_charts(&self) -> Result<Value> {
        self.get("performance/favoriteCharts").await
    }

    /// Fetch the configuration record for one favorite chart.
    pub async fn favorite_details(&self, favid: &str) -> Result<Value> {
        let favid = require_id("favid", favid)?;
        self.get(&format!(
            "performance/favoriteCharts/{}",
            urlencoding::encode(favid)
        ))
        .await
    }

    /// Fetch chart data for a favorite, optionally overriding its stored
    /// time window or test set.
    pub async fn favorite_data(&self, favid: &str, query: FavoriteDataQuery) -> Result<Value> {
        let favid = require_id("favid", favid)?;

        let params = match (query.start, query.end) {
            (Some(start), Some(end)) => {
                let (start_time, end_time) = resolve_window(&start, &end, query.tz.as_deref())?;
                ChartParams {
                    start_time: Some(start_time),
                    end_time: Some(end_time),
                    tests: query.tests,
                }
            }
            (None, None) => ChartParams {
                tests: query.tests,
                ..ChartParams::default()
            },
            _ => {
                return Err(Error::InvalidArgument(
                    "startTime and endTime must be supplied together".into(),
                ))
            }
        };

        self.get_query(
            &format!(
                "performance/favoriteCharts/{}/data",
                urlencoding::encode(favid)
            ),
            &params,
        )
        .await
    }
}
