//! Village reference data

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::types::Coordinates;

/// Number of samples in each trend series
pub const TREND_SAMPLES: usize = 7;

/// Errors raised while loading village reference data
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to parse village data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid village record '{name}': {source}")]
    InvalidRecord {
        name: String,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("Invalid coordinates for village '{0}'")]
    InvalidCoordinates(String),

    #[error("Duplicate village name: {0}")]
    DuplicateName(String),

    #[error("Village table is empty")]
    Empty,
}

/// A village with its current readings and a week of trend samples
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct LocationRecord {
    #[serde(rename = "village_name")]
    #[validate(length(min = 1, message = "Village name must not be empty"))]
    pub name: String,

    pub district: String,

    #[serde(rename = "state")]
    pub region: String,

    pub coordinates: Coordinates,

    /// Volumetric soil moisture, percent
    #[validate(range(min = 0.0, max = 100.0))]
    pub soil_moisture: f64,

    #[validate(range(min = 0.0, max = 1.0))]
    pub ndvi: f64,

    /// Expected rainfall over the next five days, millimetres
    #[validate(range(min = 0.0))]
    pub rainfall_forecast: f64,

    #[validate(length(equal = 7, message = "Soil moisture trend must have 7 samples"))]
    pub soil_moisture_trend: Vec<f64>,

    #[validate(length(equal = 7, message = "NDVI trend must have 7 samples"))]
    pub ndvi_trend: Vec<f64>,
}

/// Read-only lookup table of villages, keyed by exact name
///
/// Insertion order is preserved so search suggestions come back in the
/// order the data was authored.
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    records: Vec<LocationRecord>,
}

impl LocationTable {
    /// Build a table, validating every record
    pub fn new(records: Vec<LocationRecord>) -> Result<Self, DataError> {
        if records.is_empty() {
            return Err(DataError::Empty);
        }

        for (i, record) in records.iter().enumerate() {
            record.validate().map_err(|source| DataError::InvalidRecord {
                name: record.name.clone(),
                source,
            })?;

            if !record.coordinates.is_valid() {
                return Err(DataError::InvalidCoordinates(record.name.clone()));
            }

            if records[..i].iter().any(|r| r.name == record.name) {
                return Err(DataError::DuplicateName(record.name.clone()));
            }
        }

        Ok(Self { records })
    }

    /// Parse a JSON array of village records
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let records: Vec<LocationRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// The demo villages shipped with the application
    pub fn builtin() -> Self {
        Self {
            records: vec![
                village(
                    "Rampur",
                    "Meerut",
                    "Uttar Pradesh",
                    (29.0588, 77.7026),
                    (28.0, 0.52, 3.0),
                    [22.0, 25.0, 26.0, 28.0, 27.0, 28.0, 28.0],
                    [0.42, 0.45, 0.48, 0.50, 0.51, 0.52, 0.52],
                ),
                village(
                    "Sultanpur",
                    "Sultanpur",
                    "Uttar Pradesh",
                    (26.2644, 82.0738),
                    (42.0, 0.68, 15.0),
                    [38.0, 39.0, 40.0, 41.0, 42.0, 42.0, 42.0],
                    [0.58, 0.60, 0.62, 0.64, 0.66, 0.67, 0.68],
                ),
                village(
                    "Kharagpur",
                    "Munger",
                    "Bihar",
                    (25.3764, 86.4733),
                    (35.0, 0.58, 8.0),
                    [30.0, 32.0, 33.0, 34.0, 35.0, 35.0, 35.0],
                    [0.50, 0.52, 0.54, 0.55, 0.56, 0.57, 0.58],
                ),
                village(
                    "Narsinghpur",
                    "Narsinghpur",
                    "Madhya Pradesh",
                    (22.9476, 79.1947),
                    (25.0, 0.45, 2.0),
                    [20.0, 22.0, 23.0, 24.0, 25.0, 24.0, 25.0],
                    [0.38, 0.40, 0.42, 0.43, 0.44, 0.45, 0.45],
                ),
                village(
                    "Dharwad",
                    "Dharwad",
                    "Karnataka",
                    (15.4589, 75.0078),
                    (38.0, 0.62, 12.0),
                    [35.0, 36.0, 37.0, 37.0, 38.0, 38.0, 38.0],
                    [0.55, 0.57, 0.58, 0.59, 0.60, 0.61, 0.62],
                ),
                village(
                    "Nagpur",
                    "Nagpur",
                    "Maharashtra",
                    (21.1458, 79.0882),
                    (32.0, 0.58, 6.0),
                    [28.0, 29.0, 30.0, 31.0, 32.0, 31.0, 32.0],
                    [0.52, 0.53, 0.54, 0.56, 0.57, 0.58, 0.58],
                ),
            ],
        }
    }

    /// Exact-name lookup
    pub fn get(&self, name: &str) -> Option<&LocationRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Villages whose name contains `query`, case-insensitively
    pub fn search(&self, query: &str) -> Vec<&LocationRecord> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn village(
    name: &str,
    district: &str,
    region: &str,
    (lat, lng): (f64, f64),
    (soil_moisture, ndvi, rainfall_forecast): (f64, f64, f64),
    soil_moisture_trend: [f64; TREND_SAMPLES],
    ndvi_trend: [f64; TREND_SAMPLES],
) -> LocationRecord {
    LocationRecord {
        name: name.to_string(),
        district: district.to_string(),
        region: region.to_string(),
        coordinates: Coordinates::new(lat, lng),
        soil_moisture,
        ndvi,
        rainfall_forecast,
        soil_moisture_trend: soil_moisture_trend.to_vec(),
        ndvi_trend: ndvi_trend.to_vec(),
    }
}
