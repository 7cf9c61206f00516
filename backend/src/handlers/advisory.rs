//! HTTP handlers for villages and advisories

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{AdvisoryRecord, Coordinates, LocationQuery, LocationRecord};

use crate::error::{AppError, AppResult};
use crate::AppState;

// ============================================================================
// Villages
// ============================================================================

/// Query parameters for listing villages
#[derive(Debug, Deserialize)]
pub struct VillageSearchQuery {
    pub q: Option<String>,
}

/// Village entry in search results
#[derive(Debug, Serialize)]
pub struct VillageSummary {
    pub village_name: String,
    pub district: String,
    pub state: String,
    pub coordinates: Coordinates,
}

impl From<LocationRecord> for VillageSummary {
    fn from(record: LocationRecord) -> Self {
        Self {
            village_name: record.name,
            district: record.district,
            state: record.region,
            coordinates: record.coordinates,
        }
    }
}

/// List villages, optionally filtered by a name fragment
pub async fn list_villages(
    State(state): State<AppState>,
    Query(query): Query<VillageSearchQuery>,
) -> Json<Vec<VillageSummary>> {
    let villages = state.advisory.search(query.q.as_deref().unwrap_or_default());
    Json(villages.into_iter().map(VillageSummary::from).collect())
}

/// Full reference record for one village
pub async fn get_village(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<LocationRecord>> {
    state
        .advisory
        .village(&name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Village {}", name)))
}

// ============================================================================
// Advisories
// ============================================================================

/// Resolve the advisory for a village or map pin
pub async fn resolve_advisory(
    State(state): State<AppState>,
    payload: Result<Json<LocationQuery>, JsonRejection>,
) -> AppResult<Json<AdvisoryRecord>> {
    let Json(query) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    // A known village ignores the pin, so only a pin that will be used is checked
    if let Some(coordinates) = query.coordinates.filter(|_| !state.advisory.is_known(&query)) {
        if !coordinates.is_valid() {
            return Err(AppError::Validation {
                field: "coordinates".to_string(),
                message: format!("Coordinates out of range: {}", coordinates),
            });
        }
    }

    let advisory = state.advisory.resolve(&query).await;
    Ok(Json(advisory))
}
