//! Satellite map layer overlays

use serde::{Deserialize, Serialize};

use crate::models::DataPoints;

/// Radius of the overlay circle drawn around a farm, metres
pub const OVERLAY_RADIUS_METERS: u32 = 2000;

/// Data layer selectable on the dashboard map
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MapLayer {
    #[default]
    #[serde(rename = "NDVI")]
    Ndvi,
    #[serde(rename = "Soil Moisture")]
    SoilMoisture,
    #[serde(rename = "Rainfall")]
    Rainfall,
}

impl MapLayer {
    pub const ALL: [MapLayer; 3] = [MapLayer::Ndvi, MapLayer::SoilMoisture, MapLayer::Rainfall];

    pub fn label(&self) -> &'static str {
        match self {
            MapLayer::Ndvi => "NDVI",
            MapLayer::SoilMoisture => "Soil Moisture",
            MapLayer::Rainfall => "Rainfall",
        }
    }

    /// Parse a layer from its label, ignoring case
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|layer| layer.label().eq_ignore_ascii_case(label.trim()))
    }

    /// The reading this layer visualises
    pub fn value(&self, points: &DataPoints) -> f64 {
        match self {
            MapLayer::Ndvi => points.current_ndvi,
            MapLayer::SoilMoisture => points.current_soil_moisture,
            MapLayer::Rainfall => points.rainfall_forecast_mm,
        }
    }

    /// Colour band for a reading of this layer
    pub fn color(&self, value: f64) -> &'static str {
        match self {
            MapLayer::Ndvi if value > 0.6 => "#22c55e",
            MapLayer::Ndvi if value > 0.4 => "#eab308",
            MapLayer::Ndvi => "#ef4444",
            MapLayer::SoilMoisture if value > 35.0 => "#3b82f6",
            MapLayer::SoilMoisture if value > 25.0 => "#f59e0b",
            MapLayer::SoilMoisture => "#ef4444",
            MapLayer::Rainfall if value > 10.0 => "#0ea5e9",
            MapLayer::Rainfall if value > 5.0 => "#06b6d4",
            MapLayer::Rainfall => "#64748b",
        }
    }

    pub fn opacity(&self) -> f32 {
        match self {
            MapLayer::Ndvi => 0.4,
            MapLayer::SoilMoisture => 0.5,
            MapLayer::Rainfall => 0.3,
        }
    }

    /// Overlay for an advisory's snapshot
    pub fn overlay(&self, points: &DataPoints) -> LayerOverlay {
        LayerOverlay {
            layer: *self,
            color: self.color(self.value(points)).to_string(),
            opacity: self.opacity(),
            radius_meters: OVERLAY_RADIUS_METERS,
        }
    }
}

/// Circle drawn over the farm for the selected layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayerOverlay {
    pub layer: MapLayer,
    pub color: String,
    pub opacity: f32,
    pub radius_meters: u32,
}
