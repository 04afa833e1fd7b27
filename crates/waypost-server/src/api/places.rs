use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use waypost_db::PgPlaceStore;
use waypost_enrich::{enrich_addresses, EnrichMode, EnrichmentReport};

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct PlacePinItem {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
}

pub(super) async fn list_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<PlacePinItem>>>, ApiError> {
    let rows = waypost_db::list_place_pins(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &waypost_db::DbError::from(e)))?;

    let data = rows
        .into_iter()
        .map(|row| PlacePinItem {
            id: row.public_id,
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
            street: row.street,
            house_number: row.house_number,
            city: row.city,
            postcode: row.postcode,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[derive(Debug, Deserialize)]
pub(super) struct EnrichRequest {
    #[serde(default)]
    ids: Vec<Uuid>,
    /// Batch mode emits progress/error telemetry; single mode is the quiet
    /// path for small, latency-sensitive requests.
    #[serde(default)]
    batch: bool,
}

/// Trigger address enrichment for the given places.
///
/// Any completed run answers 200 — partial failures are reported in-band in
/// the report's `errors` array. 400 is reserved for a missing/empty id list
/// and 500 for a failure before any per-item processing begins.
pub(super) async fn enrich_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<EnrichRequest>,
) -> Result<Json<ApiResponse<EnrichmentReport>>, ApiError> {
    if request.ids.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "ids must be a non-empty list of place ids",
        ));
    }

    let mode = if request.batch {
        EnrichMode::Batch
    } else {
        EnrichMode::Single
    };

    let store = PgPlaceStore::new(state.pool.clone());
    let report = enrich_addresses(&store, state.resolver.as_ref(), &request.ids, mode)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "enrichment aborted before per-item processing");
            ApiError::new(
                req_id.0.clone(),
                "internal_error",
                "failed to load places for enrichment",
            )
        })?;

    Ok(Json(ApiResponse {
        data: report,
        meta: ResponseMeta::new(req_id.0),
    }))
}
