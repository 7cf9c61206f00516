//! WebAssembly module for KhetSetGo
//!
//! Provides client-side computation for:
//! - Advisory resolution over the bundled village table
//! - Village search suggestions
//! - Dashboard screen transitions
//! - Map layer overlay colours

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::resolver::*;
pub use shared::types::*;
pub use shared::view::*;

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(js_error)
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"KhetSetGo advisory module loaded".into());
}

/// Resolve an advisory from a `{village_name?, coordinates?}` JSON query
#[wasm_bindgen]
pub fn resolve_advisory(query_json: &str) -> Result<String, JsValue> {
    let query: LocationQuery = serde_json::from_str(query_json)
        .map_err(|e| js_error(format!("Invalid location query JSON: {}", e)))?;

    let advisory = AdvisoryResolver::builtin().resolve(&query);
    to_json(&advisory)
}

/// Classify readings under the default thresholds
#[wasm_bindgen]
pub fn classify_readings(soil_moisture: f64, rainfall_forecast_mm: f64) -> String {
    classify(soil_moisture, rainfall_forecast_mm).to_string()
}

/// Dashboard badge text for the advisory the readings would produce
#[wasm_bindgen]
pub fn advisory_headline(soil_moisture: f64, rainfall_forecast_mm: f64) -> String {
    classify(soil_moisture, rainfall_forecast_mm).headline().to_string()
}

/// Village names matching a search, as a JSON array
#[wasm_bindgen]
pub fn search_villages(query: &str) -> String {
    let table = LocationTable::builtin();
    let names: Vec<&str> = table.search(query).into_iter().map(|r| r.name.as_str()).collect();
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}

/// Overlay colour for a layer label and reading
#[wasm_bindgen]
pub fn layer_color(layer: &str, value: f64) -> Option<String> {
    MapLayer::from_label(layer).map(|l| l.color(value).to_string())
}

/// Overlay for a layer over an advisory's `data_points` JSON
#[wasm_bindgen]
pub fn layer_overlay(layer: &str, data_points_json: &str) -> Result<String, JsValue> {
    let layer = MapLayer::from_label(layer).ok_or_else(|| js_error(format!("Unknown layer: {}", layer)))?;
    let points: DataPoints = serde_json::from_str(data_points_json)
        .map_err(|e| js_error(format!("Invalid data points JSON: {}", e)))?;
    to_json(&layer.overlay(&points))
}

/// Screen state machine held by the page
#[wasm_bindgen]
pub struct Dashboard {
    view: ViewModel,
    villages: LocationTable,
}

#[wasm_bindgen]
impl Dashboard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Dashboard {
        Dashboard {
            view: ViewModel::new(),
            villages: LocationTable::builtin(),
        }
    }

    /// Current screen: `landing`, `farm-selection` or `dashboard`
    pub fn state(&self) -> String {
        self.view.state.to_string()
    }

    /// Apply a `{type, value?}` event; errors carry the user-facing prompt
    pub fn apply(&mut self, event_json: &str) -> Result<String, JsValue> {
        let event: ViewEvent = serde_json::from_str(event_json)
            .map_err(|e| js_error(format!("Invalid event JSON: {}", e)))?;

        match self.view.apply(event, &self.villages) {
            Ok(state) => Ok(state.to_string()),
            Err(e) => {
                web_sys::console::warn_1(&e.to_string().into());
                Err(js_error(e))
            }
        }
    }

    pub fn suggestions(&self) -> String {
        serde_json::to_string(&self.view.suggestions(&self.villages)).unwrap_or_else(|_| "[]".to_string())
    }

    /// Advisory for the current selection
    pub fn advisory(&self) -> Result<String, JsValue> {
        let resolver = AdvisoryResolver::new(
            std::sync::Arc::new(self.villages.clone()),
            AdvisoryPolicy::default(),
        );
        to_json(&resolver.resolve(&self.view.location_query()))
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_readings() {
        assert_eq!(classify_readings(28.0, 3.0), "Irrigation");
        assert_eq!(classify_readings(35.0, 0.0), "Crop");
        assert_eq!(classify_readings(34.99, 9.99), "Irrigation");
        assert_eq!(classify_readings(10.0, 10.0), "Crop");
    }

    #[test]
    fn test_advisory_headline() {
        assert_eq!(advisory_headline(28.0, 3.0), "Irrigation Alert");
        assert_eq!(advisory_headline(42.0, 15.0), "Crop Recommendation");
    }

    #[test]
    fn test_search_villages() {
        assert_eq!(search_villages("pur"), r#"["Rampur","Sultanpur","Kharagpur","Narsinghpur","Nagpur"]"#);
        assert_eq!(search_villages("zzz"), "[]");
    }

    #[test]
    fn test_layer_color() {
        assert_eq!(layer_color("NDVI", 0.52).as_deref(), Some("#eab308"));
        assert_eq!(layer_color("Rainfall", 15.0).as_deref(), Some("#0ea5e9"));
        assert!(layer_color("Wind", 1.0).is_none());
    }

    #[test]
    fn test_dashboard_state() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.state(), "landing");
        assert_eq!(dashboard.suggestions(), "[]");
    }
}
