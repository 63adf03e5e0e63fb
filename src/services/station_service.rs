use chrono::{DateTime, Duration, SecondsFormat, Utc};
use reqwest::Url;
use serde_json::Value;
use tracing::info;

use super::caching_proxy::CachingProxy;
use crate::error::{ProxyError, Result};
use crate::models::ParameterSet;

/// Parameters any one of which pins the readings window explicitly.
const WINDOW_PARAMS: [&str; 3] = ["today", "since", "date"];

/// Default readings window when the caller gives none.
const DEFAULT_LOOKBACK_HOURS: i64 = 24;

/// Station and readings lookups against the flood-monitoring API, all going
/// through the shared [`CachingProxy`].
#[derive(Clone)]
pub struct StationService {
    proxy: CachingProxy,
    base_url: Url,
}

impl StationService {
    pub fn new(proxy: CachingProxy, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ProxyError::Config(format!("invalid base URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ProxyError::Config(format!(
                "base URL cannot carry a path: {}",
                base_url
            )));
        }
        Ok(Self { proxy, base_url })
    }

    pub fn stations_url(&self) -> String {
        self.resource_url(&["id", "stations"])
    }

    /// Readings resource for one station. The id is pushed as a single
    /// escaped path segment, so `/`, `?` and `#` cannot leave it.
    pub fn readings_url(&self, station_id: &str) -> Result<String> {
        if matches!(station_id, "" | "." | "..") {
            return Err(ProxyError::InvalidInput(format!(
                "invalid station id: {:?}",
                station_id
            )));
        }
        Ok(self.resource_url(&["id", "stations", station_id, "readings"]))
    }

    fn resource_url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        // checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }

    pub async fn get_stations(&self, params: &ParameterSet) -> Result<Value> {
        self.proxy.get_cached(&self.stations_url(), params, None).await
    }

    /// First station whose reference matches `station_id`, if any.
    pub async fn find_station(&self, station_id: &str) -> Result<Option<Value>> {
        let params = ParameterSet::new().with("stationReference", station_id);
        let stations = self.get_stations(&params).await?;

        let station = stations
            .get("items")
            .and_then(|items| items.as_array())
            .and_then(|items| items.first())
            .cloned();

        if station.is_none() {
            info!("No station found for reference {}", station_id);
        }
        Ok(station)
    }

    pub async fn get_station_readings(
        &self,
        station_id: &str,
        params: &ParameterSet,
    ) -> Result<Value> {
        let url = self.readings_url(station_id)?;
        let params = normalize_reading_params(params, self.proxy.clock().now());
        self.proxy.get_cached(&url, &params, None).await
    }
}

/// Shapes a readings query before it is keyed and sent upstream.
///
/// Without a non-empty `today`, `since` or `date`, a `since` of `now - 24h`
/// is added. `_sorted` is always set (empty) so upstream orders by time.
pub fn normalize_reading_params(params: &ParameterSet, now: DateTime<Utc>) -> ParameterSet {
    let mut shaped = params.clone();

    if !WINDOW_PARAMS.iter().any(|p| params.has_value(p)) {
        let since = now - Duration::hours(DEFAULT_LOOKBACK_HOURS);
        shaped = shaped.with("since", since.to_rfc3339_opts(SecondsFormat::Secs, true));
    }

    shaped.with("_sorted", "")
}
