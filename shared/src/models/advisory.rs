//! Advisory classification and records

use serde::{Deserialize, Serialize};

use crate::models::LocationRecord;
use crate::types::Coordinates;

/// Soil moisture (percent) at or above which no irrigation is advised
pub const SOIL_MOISTURE_THRESHOLD: f64 = 35.0;

/// Rainfall forecast (mm) at or above which no irrigation is advised
pub const RAINFALL_THRESHOLD_MM: f64 = 10.0;

/// The two advisories the resolver can issue
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Classification {
    Irrigation,
    Crop,
}

impl Classification {
    /// Dashboard badge text
    pub fn headline(&self) -> &'static str {
        match self {
            Classification::Irrigation => "Irrigation Alert",
            Classification::Crop => "Crop Recommendation",
        }
    }

    /// Primary advice sent to the farmer
    pub fn advice(&self) -> &'static str {
        match self {
            Classification::Irrigation => "Sinchai abhi karo – 20mm paani apply karein",
            Classification::Crop => "Fasal ki sthiti acchi hai – gehun ki buwai ke liye tayar",
        }
    }

    /// Reason line, interpolating the readings that drove the decision
    pub fn reason(&self, record: &LocationRecord) -> String {
        match self {
            Classification::Irrigation => format!(
                "Mitti ki nami ({}%) kam hai, aur agle 5 dinon mein baarish ki ummeed ({}mm) nahi hai.",
                record.soil_moisture, record.rainfall_forecast
            ),
            Classification::Crop => format!(
                "Mitti mein paryaapt nami ({}%) hai aur NDVI trend accha hai ({}).",
                record.soil_moisture, record.ndvi
            ),
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Irrigation => write!(f, "Irrigation"),
            Classification::Crop => write!(f, "Crop"),
        }
    }
}

/// Threshold policy for the irrigation decision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AdvisoryPolicy {
    pub soil_moisture_threshold: f64,
    pub rainfall_threshold_mm: f64,
}

impl Default for AdvisoryPolicy {
    fn default() -> Self {
        Self {
            soil_moisture_threshold: SOIL_MOISTURE_THRESHOLD,
            rainfall_threshold_mm: RAINFALL_THRESHOLD_MM,
        }
    }
}

impl AdvisoryPolicy {
    /// Crop when either reading reaches its threshold, Irrigation otherwise.
    /// Readings exactly on a threshold classify as Crop.
    pub fn classify(&self, soil_moisture: f64, rainfall_forecast_mm: f64) -> Classification {
        if soil_moisture >= self.soil_moisture_threshold
            || rainfall_forecast_mm >= self.rainfall_threshold_mm
        {
            Classification::Crop
        } else {
            Classification::Irrigation
        }
    }
}

/// Classify under the default thresholds
pub fn classify(soil_moisture: f64, rainfall_forecast_mm: f64) -> Classification {
    AdvisoryPolicy::default().classify(soil_moisture, rainfall_forecast_mm)
}

/// Metric snapshot attached to an advisory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataPoints {
    pub current_soil_moisture: f64,
    pub current_ndvi: f64,
    pub rainfall_forecast_mm: f64,
    #[serde(rename = "soil_moisture_trend_30_days")]
    pub soil_moisture_trend: Vec<f64>,
    #[serde(rename = "ndvi_trend_30_days")]
    pub ndvi_trend: Vec<f64>,
}

impl From<&LocationRecord> for DataPoints {
    fn from(record: &LocationRecord) -> Self {
        Self {
            current_soil_moisture: record.soil_moisture,
            current_ndvi: record.ndvi,
            rainfall_forecast_mm: record.rainfall_forecast,
            soil_moisture_trend: record.soil_moisture_trend.clone(),
            ndvi_trend: record.ndvi_trend.clone(),
        }
    }
}

/// Advisory shown on the dashboard and sent to the farmer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisoryRecord {
    pub farm_id: String,
    #[serde(rename = "village_name")]
    pub location_name: String,
    pub district: String,
    #[serde(rename = "state")]
    pub region: String,
    pub coordinates: Coordinates,
    #[serde(rename = "recommendation_type")]
    pub classification: Classification,
    #[serde(rename = "primary_advice_hindi")]
    pub advice: String,
    #[serde(rename = "reason_hindi")]
    pub reason: String,
    pub data_points: DataPoints,
}

impl AdvisoryRecord {
    /// Build the advisory for a village under the given policy
    pub fn for_location(record: &LocationRecord, policy: &AdvisoryPolicy) -> Self {
        let classification = policy.classify(record.soil_moisture, record.rainfall_forecast);

        Self {
            farm_id: farm_id(&record.name),
            location_name: record.name.clone(),
            district: record.district.clone(),
            region: record.region.clone(),
            coordinates: record.coordinates,
            classification,
            advice: classification.advice().to_string(),
            reason: classification.reason(record),
            data_points: DataPoints::from(record),
        }
    }
}

/// Farm identifier derived from the village name
pub fn farm_id(location_name: &str) -> String {
    format!("FARM-{}", location_name.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationTable;
    use proptest::prelude::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(classify(35.0, 0.0), Classification::Crop);
        assert_eq!(classify(0.0, 10.0), Classification::Crop);
        assert_eq!(classify(34.99, 9.99), Classification::Irrigation);
        assert_eq!(classify(28.0, 3.0), Classification::Irrigation);
        assert_eq!(classify(42.0, 15.0), Classification::Crop);
    }

    #[test]
    fn test_custom_policy() {
        let policy = AdvisoryPolicy {
            soil_moisture_threshold: 20.0,
            rainfall_threshold_mm: 50.0,
        };
        assert_eq!(policy.classify(25.0, 0.0), Classification::Crop);
        assert_eq!(policy.classify(19.0, 49.0), Classification::Irrigation);
    }

    #[test]
    fn test_irrigation_templates() {
        let table = LocationTable::builtin();
        let advisory = AdvisoryRecord::for_location(table.get("Rampur").unwrap(), &AdvisoryPolicy::default());

        assert_eq!(advisory.classification, Classification::Irrigation);
        assert_eq!(advisory.farm_id, "FARM-RAMPUR");
        assert_eq!(advisory.advice, "Sinchai abhi karo – 20mm paani apply karein");
        assert_eq!(
            advisory.reason,
            "Mitti ki nami (28%) kam hai, aur agle 5 dinon mein baarish ki ummeed (3mm) nahi hai."
        );
    }

    #[test]
    fn test_crop_templates() {
        let table = LocationTable::builtin();
        let advisory = AdvisoryRecord::for_location(table.get("Kharagpur").unwrap(), &AdvisoryPolicy::default());

        assert_eq!(advisory.classification, Classification::Crop);
        assert_eq!(
            advisory.reason,
            "Mitti mein paryaapt nami (35%) hai aur NDVI trend accha hai (0.58)."
        );
    }

    #[test]
    fn test_wire_field_names() {
        let table = LocationTable::builtin();
        let advisory = AdvisoryRecord::for_location(table.get("Dharwad").unwrap(), &AdvisoryPolicy::default());
        let json = serde_json::to_value(&advisory).unwrap();

        assert_eq!(json["village_name"], "Dharwad");
        assert_eq!(json["state"], "Karnataka");
        assert_eq!(json["recommendation_type"], "Crop");
        assert_eq!(json["data_points"]["rainfall_forecast_mm"], 12.0);
        assert_eq!(json["data_points"]["ndvi_trend_30_days"].as_array().unwrap().len(), 7);
    }

    proptest! {
        /// Classification depends only on the two readings
        #[test]
        fn prop_classification_matches_rule(soil in 0.0f64..100.0, rain in 0.0f64..50.0) {
            let expected = if soil < 35.0 && rain < 10.0 {
                Classification::Irrigation
            } else {
                Classification::Crop
            };
            prop_assert_eq!(classify(soil, rain), expected);
        }
    }
}
