//! Advisory resolution
//!
//! Maps a location query to an [`AdvisoryRecord`]. Known villages come from
//! an injected [`LocationTable`]; anything else resolves to a synthetic
//! default record so the dashboard always has something to show.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::{AdvisoryPolicy, AdvisoryRecord, LocationRecord, LocationTable};
use crate::types::{Coordinates, DEFAULT_CENTER};

/// Name given to locations that are not in the village table
pub const CUSTOM_LOCATION_NAME: &str = "Custom Location";

/// What the user picked: a village, a map pin, or both
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationQuery {
    #[serde(default)]
    pub village_name: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl LocationQuery {
    pub fn village(name: impl Into<String>) -> Self {
        Self {
            village_name: Some(name.into()),
            coordinates: None,
        }
    }

    pub fn pin(coordinates: Coordinates) -> Self {
        Self {
            village_name: None,
            coordinates: Some(coordinates),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.village_name.is_none() && self.coordinates.is_none()
    }
}

/// Placeholder record for an unmapped location
pub fn default_location(coordinates: Option<Coordinates>) -> LocationRecord {
    LocationRecord {
        name: CUSTOM_LOCATION_NAME.to_string(),
        district: "Unknown".to_string(),
        region: "India".to_string(),
        coordinates: coordinates.unwrap_or(DEFAULT_CENTER),
        soil_moisture: 30.0,
        ndvi: 0.55,
        rainfall_forecast: 5.0,
        soil_moisture_trend: vec![25.0, 27.0, 30.0, 32.0, 30.0, 28.0, 30.0],
        ndvi_trend: vec![0.4, 0.45, 0.5, 0.52, 0.55, 0.54, 0.55],
    }
}

/// Resolves location queries against a read-only village table
#[derive(Debug, Clone)]
pub struct AdvisoryResolver {
    table: Arc<LocationTable>,
    policy: AdvisoryPolicy,
}

impl AdvisoryResolver {
    pub fn new(table: Arc<LocationTable>, policy: AdvisoryPolicy) -> Self {
        Self { table, policy }
    }

    /// Resolver over the demo villages with default thresholds
    pub fn builtin() -> Self {
        Self::new(Arc::new(LocationTable::builtin()), AdvisoryPolicy::default())
    }

    /// Produce the advisory for a query. Never fails.
    pub fn resolve(&self, query: &LocationQuery) -> AdvisoryRecord {
        match query.village_name.as_deref().and_then(|name| self.table.get(name)) {
            Some(record) => AdvisoryRecord::for_location(record, &self.policy),
            None => AdvisoryRecord::for_location(&default_location(query.coordinates), &self.policy),
        }
    }

    /// Whether a query names a village in the table
    pub fn is_known(&self, query: &LocationQuery) -> bool {
        query
            .village_name
            .as_deref()
            .is_some_and(|name| self.table.get(name).is_some())
    }

    pub fn table(&self) -> &LocationTable {
        &self.table
    }

    pub fn policy(&self) -> &AdvisoryPolicy {
        &self.policy
    }
}
