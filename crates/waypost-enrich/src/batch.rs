//! Sequential batch resolution with per-item failure isolation.

use uuid::Uuid;
use waypost_geocode::{AddressComponents, ReverseGeocoder};

/// One batch input item: a record identity plus its coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
}

/// Outcome of resolving one item. `address: None` means the provider
/// returned no address — distinct from a transport failure, which is
/// additionally reported through the orchestrator's error callback.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentResult {
    pub id: Uuid,
    pub address: Option<AddressComponents>,
}

/// Resolves `coordinates` in input order, one at a time.
///
/// `on_progress(completed, total)` fires after every item regardless of
/// outcome. `on_error(id, message)` fires only for items whose resolution
/// failed (not for a legitimate "no address" result). The returned sequence
/// has exactly one entry per input item, in input order — a failed item
/// yields `address: None` and never aborts the rest of the batch.
pub async fn resolve_batch<G, P, E>(
    geocoder: &G,
    coordinates: &[Coordinate],
    mut on_progress: P,
    mut on_error: E,
) -> Vec<EnrichmentResult>
where
    G: ReverseGeocoder,
    P: FnMut(usize, usize),
    E: FnMut(Uuid, &str),
{
    let total = coordinates.len();
    let mut results = Vec::with_capacity(total);

    for (index, coordinate) in coordinates.iter().enumerate() {
        let address = match geocoder
            .reverse_lookup(coordinate.latitude, coordinate.longitude)
            .await
        {
            Ok(address) => address,
            Err(e) => {
                tracing::warn!(place_id = %coordinate.id, error = %e, "batch item failed to resolve");
                on_error(coordinate.id, &e.to_string());
                None
            }
        };

        results.push(EnrichmentResult {
            id: coordinate.id,
            address,
        });
        on_progress(index + 1, total);
    }

    results
}
