//! Browser tests for the bindings that cross the JS boundary
//!
//! Run with `wasm-pack test --headless --chrome wasm`.

#![cfg(target_arch = "wasm32")]

use khetsetgo_wasm::{layer_overlay, resolve_advisory, Dashboard};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn resolves_known_village() {
    let json = resolve_advisory(r#"{"village_name":"Sultanpur"}"#).unwrap();
    assert!(json.contains(r#""recommendation_type":"Crop""#));
}

#[wasm_bindgen_test]
fn rejects_malformed_query() {
    assert!(resolve_advisory("{not json").is_err());
}

#[wasm_bindgen_test]
fn unknown_layer_is_an_error() {
    assert!(layer_overlay("Wind", "{}").is_err());
}

#[wasm_bindgen_test]
fn continue_without_location_fails() {
    let mut dashboard = Dashboard::new();
    assert_eq!(dashboard.apply(r#"{"type":"start"}"#).unwrap(), "farm-selection");
    assert!(dashboard.apply(r#"{"type":"continue"}"#).is_err());

    dashboard
        .apply(r#"{"type":"select_village","value":"Rampur"}"#)
        .unwrap();
    assert_eq!(dashboard.apply(r#"{"type":"continue"}"#).unwrap(), "dashboard");
    assert!(dashboard.advisory().unwrap().contains("FARM-RAMPUR"));
}
