use serde_json::Map;

use crate::constants::POLYGON_OFFSET;
use crate::error::CoordinateError;
use crate::models::{Feature, Geometry};

/// A validated WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Checks ranges; NaN fails both.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::OutOfRange);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parses the raw query values of the HTTP endpoint.
    pub fn parse(latitude: Option<&str>, longitude: Option<&str>) -> Result<Self, CoordinateError> {
        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            return Err(CoordinateError::Missing);
        };
        let latitude = parse_degrees("latitude", latitude)?;
        let longitude = parse_degrees("longitude", longitude)?;
        Self::new(latitude, longitude)
    }

    /// Square south-west of the point, as a closed GeoJSON ring.
    pub fn sample_polygon(&self) -> Feature {
        let (lon, lat) = (self.longitude, self.latitude);
        let ring = vec![
            [lon, lat],
            [lon, lat - POLYGON_OFFSET],
            [lon - POLYGON_OFFSET, lat - POLYGON_OFFSET],
            [lon - POLYGON_OFFSET, lat],
            [lon, lat],
        ];

        Feature {
            kind: "Feature".to_string(),
            properties: Map::new(),
            geometry: Geometry {
                kind: "Polygon".to_string(),
                coordinates: vec![ring],
            },
        }
    }
}

fn parse_degrees(name: &'static str, raw: &str) -> Result<f64, CoordinateError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CoordinateError::NotANumber {
            name,
            value: raw.to_string(),
        })
}
