//! Enrichment service: candidate selection, resolution, persistence, report.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;
use waypost_geocode::ReverseGeocoder;

use crate::batch::{resolve_batch, Coordinate, EnrichmentResult};
use crate::store::{PlaceRecord, PlaceStore, StoreError};

/// How candidates are resolved.
///
/// `Batch` emits progress telemetry and is used for bulk backfills;
/// `Single` is the quiet sequential path for small, latency-sensitive
/// requests. Both isolate per-item faults the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichMode {
    Single,
    Batch,
}

/// Summary of one enrichment run. Built fresh per invocation and discarded
/// after the response is sent; `total` counts candidates, not input ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichmentReport {
    pub message: String,
    pub enriched: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl EnrichmentReport {
    fn empty(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            enriched: 0,
            total: 0,
            errors: Vec::new(),
        }
    }
}

/// The only failure that aborts a run: the initial record fetch. Everything
/// after that point is recovered per item into the report's error strings.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Selects the records among `ids` that are missing street or city,
/// resolves their addresses, persists successful resolutions, and returns
/// a summary.
///
/// Partial failures — a provider timeout, a rejected update, a coordinate
/// the provider has no address for — are recorded as error strings and
/// never abort the remaining items. Re-running over the same ids is safe:
/// address completeness is the sole "still needs work" indicator.
///
/// # Errors
///
/// Returns [`EnrichError::Store`] only if the initial fetch fails, before
/// any per-item work has begun.
pub async fn enrich_addresses<S, G>(
    store: &S,
    geocoder: &G,
    ids: &[Uuid],
    mode: EnrichMode,
) -> Result<EnrichmentReport, EnrichError>
where
    S: PlaceStore,
    G: ReverseGeocoder,
{
    let places = store.load_places(ids).await?;
    if places.is_empty() {
        return Ok(EnrichmentReport::empty("No places found"));
    }

    let candidates: Vec<PlaceRecord> = places
        .into_iter()
        .filter(PlaceRecord::needs_address)
        .collect();
    if candidates.is_empty() {
        return Ok(EnrichmentReport::empty(
            "All places already have address information",
        ));
    }

    let total = candidates.len();
    tracing::info!(candidates = total, mode = ?mode, "starting address enrichment");

    // Resolution failures, kept separately so the persistence pass below can
    // tell "failed to resolve" apart from "provider has no address".
    let mut failed: Vec<(Uuid, String)> = Vec::new();

    let results: Vec<EnrichmentResult> = match mode {
        EnrichMode::Batch => {
            let coordinates: Vec<Coordinate> = candidates
                .iter()
                .map(|place| Coordinate {
                    id: place.id,
                    latitude: place.latitude,
                    longitude: place.longitude,
                })
                .collect();
            resolve_batch(
                geocoder,
                &coordinates,
                |completed, total| {
                    tracing::info!(completed, total, "address enrichment progress");
                },
                |id, message| failed.push((id, message.to_owned())),
            )
            .await
        }
        EnrichMode::Single => {
            let mut results = Vec::with_capacity(total);
            for place in &candidates {
                let address = match geocoder
                    .reverse_lookup(place.latitude, place.longitude)
                    .await
                {
                    Ok(address) => address,
                    Err(e) => {
                        failed.push((place.id, e.to_string()));
                        None
                    }
                };
                results.push(EnrichmentResult {
                    id: place.id,
                    address,
                });
            }
            results
        }
    };

    let failed_ids: HashSet<Uuid> = failed.iter().map(|(id, _)| *id).collect();
    let mut errors: Vec<String> = failed
        .into_iter()
        .map(|(id, message)| format!("failed to resolve place {id}: {message}"))
        .collect();

    let mut enriched = 0usize;
    for result in &results {
        match &result.address {
            Some(address) => match store.update_address(result.id, address).await {
                Ok(()) => enriched += 1,
                Err(e) => errors.push(format!("failed to update place {}: {e}", result.id)),
            },
            // Already reported as a resolution failure above.
            None if failed_ids.contains(&result.id) => {}
            None => errors.push(format!("no address found for place {}", result.id)),
        }
    }

    tracing::info!(enriched, total, errors = errors.len(), "address enrichment finished");

    Ok(EnrichmentReport {
        message: format!("Enriched {enriched} of {total} places"),
        enriched,
        total,
        errors,
    })
}
