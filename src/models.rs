use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

// ============================================================================
// STAC API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ItemCollection {
    pub features: Option<Vec<StacItem>>,
}

#[derive(Debug, Deserialize)]
pub struct StacItem {
    pub id: Option<String>,
    #[serde(default)]
    pub assets: HashMap<String, Asset>,
    #[serde(default)]
    pub properties: ItemProperties,
}

#[derive(Debug, Deserialize)]
pub struct Asset {
    pub href: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemProperties {
    pub start_datetime: Option<String>,
}

// ============================================================================
// GeoJSON Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: Map<String, Value>,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

// ============================================================================
// Raster API Models
// ============================================================================

/// Aggregates of one raster band. Numbers are kept as sent so that
/// integers render without a trailing `.0`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BandStatistics {
    pub min: Number,
    pub mean: Number,
    pub max: Number,
    pub majority: Number,
}

// ============================================================================
// Lookup results
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Co2Report {
    /// Band statistics for the sampled polygon, with the `YYYY-MM` period
    /// of the catalog item they were computed from.
    Statistics { period: String, stats: BandStatistics },
    /// The upstream services had nothing usable; carries a readable reason.
    Unavailable(String),
}

// ============================================================================
// Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetCo2Request {
    /// Latitude in decimal degrees, -90 to 90
    pub latitude: f64,
    /// Longitude in decimal degrees, -180 to 180
    pub longitude: f64,
}

/// Raw query string of the HTTP endpoint; parsed by hand so each failure
/// gets its own message.
#[derive(Debug, Default, PartialEq)]
pub struct CoordinateQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl CoordinateQuery {
    /// Keeps the first value of each parameter; repeats and unknown keys
    /// are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "latitude" => &mut query.latitude,
                "longitude" => &mut query.longitude,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

#[derive(Debug, Serialize)]
pub struct ResultEnvelope {
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
