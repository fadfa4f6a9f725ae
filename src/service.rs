use std::sync::Arc;

use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::UpstreamConfig;
use crate::constants::{BAND, ITEM_LIMIT, USER_AGENT};
use crate::error::FetchError;
use crate::formatters::year_month;
use crate::geometry::Coordinate;
use crate::models::{
    BandStatistics, Co2Report, Feature, ItemCollection, StacItem,
};

/// Looks up CO2 emission statistics from the STAC catalog and raster API
#[derive(Clone)]
pub struct StatsService {
    client: Arc<Client>,
    config: Arc<UpstreamConfig>,
}

impl StatsService {
    /// Creates a new service talking to the given upstreams
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            config: Arc::new(config),
        })
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }

    /// Fetches the catalog items of the configured collection
    async fn fetch_items(&self) -> Result<Vec<StacItem>, FetchError> {
        let url = self.config.items_url();
        tracing::debug!("Fetching catalog items from {}", url);

        let collection = self
            .make_request::<ItemCollection>(&url, &[("limit", ITEM_LIMIT.to_string())])
            .await?;

        collection
            .features
            .ok_or_else(|| FetchError::MissingKey("features".to_string()))
    }

    /// Posts the polygon to the raster statistics endpoint for one COG.
    /// The body is decoded whatever the status so upstream errors can be
    /// reported.
    async fn generate_stats(
        &self,
        href: &str,
        polygon: &Feature,
    ) -> Result<Value, FetchError> {
        let response = self
            .client
            .post(self.config.statistics_url())
            .query(&[("url", href)])
            .json(polygon)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!("Statistics request failed with status: {}", response.status());
        }

        Ok(response.json::<Value>().await?)
    }

    /// Runs the full lookup for one coordinate
    pub async fn get_co2_statistics(&self, point: Coordinate) -> Result<Co2Report, FetchError> {
        tracing::info!(
            "Getting CO2 statistics for coordinates: {}, {}",
            point.latitude,
            point.longitude
        );

        let items = self.fetch_items().await?;
        let Some(item) = items.first() else {
            return Ok(Co2Report::Unavailable(
                "No items returned from STAC API.".to_string(),
            ));
        };

        let polygon = point.sample_polygon();

        let asset_name = &self.config.asset;
        let Some(asset) = item.assets.get(asset_name) else {
            let message = match &item.id {
                Some(id) => format!("Asset '{asset_name}' not found in STAC item {id}."),
                None => format!("Asset '{asset_name}' not found in STAC item."),
            };
            return Ok(Co2Report::Unavailable(message));
        };

        let body = self.generate_stats(&asset.href, &polygon).await?;
        let properties = match body.get("properties") {
            Some(Value::Object(properties)) => properties.clone(),
            _ => {
                let detail = body.get("detail").unwrap_or(&body);
                return Ok(Co2Report::Unavailable(format!(
                    "Statistics API error: {}",
                    render_text(detail)
                )));
            }
        };

        let start_datetime = item
            .properties
            .start_datetime
            .as_deref()
            .ok_or_else(|| FetchError::MissingKey("start_datetime".to_string()))?;

        let merged = merge_period(properties, start_datetime);
        let report = extract_report(merged)?;

        if let Co2Report::Statistics { period, .. } = &report {
            tracing::info!("Statistics computed from item for period {}", period);
        }
        Ok(report)
    }
}

/// Adds the item's `YYYY-MM` period to the statistics properties.
fn merge_period(mut properties: Map<String, Value>, start_datetime: &str) -> Map<String, Value> {
    properties.insert(
        "start_datetime".to_string(),
        Value::String(year_month(start_datetime)),
    );
    properties
}

/// Pulls band statistics out of the merged properties.
fn extract_report(mut merged: Map<String, Value>) -> Result<Co2Report, FetchError> {
    let period = merged
        .get("start_datetime")
        .map(render_text)
        .unwrap_or_default();

    let Some(statistics) = merged.remove("statistics") else {
        let carried = merged
            .get("detail")
            .or_else(|| merged.get("error"))
            .map(render_text)
            .unwrap_or_else(|| "No statistics returned for this location.".to_string());
        return Ok(Co2Report::Unavailable(carried));
    };

    let mut bands = match statistics {
        Value::Object(bands) => bands,
        other => {
            return Err(FetchError::Value(format!(
                "statistics is not an object: {other}"
            )))
        }
    };
    let band = bands
        .remove(BAND)
        .ok_or_else(|| FetchError::MissingKey(BAND.to_string()))?;
    let stats = serde_json::from_value::<BandStatistics>(band)
        .map_err(|e| FetchError::Value(e.to_string()))?;

    Ok(Co2Report::Statistics { period, stats })
}

fn render_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
