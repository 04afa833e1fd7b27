//! Port for the record store the pipeline reads from and writes to.

use std::future::Future;

use thiserror::Error;
use uuid::Uuid;
use waypost_geocode::AddressComponents;

/// Failure reported by a record store operation.
///
/// The store is an external collaborator; the pipeline only needs
/// success-or-error, so the concrete backend error is carried opaquely.
#[derive(Debug, Error)]
#[error("record store error: {source}")]
pub struct StoreError {
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl StoreError {
    pub fn new<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self {
            source: source.into(),
        }
    }
}

/// The slice of a place record the pipeline consumes: identity, coordinates,
/// and the two fields that decide candidacy.
#[derive(Debug, Clone)]
pub struct PlaceRecord {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub street: Option<String>,
    pub city: Option<String>,
}

impl PlaceRecord {
    /// A place is a candidate for enrichment while street or city is missing.
    #[must_use]
    pub fn needs_address(&self) -> bool {
        self.street.is_none() || self.city.is_none()
    }
}

/// Record store operations used by the enrichment service.
///
/// `update_address` is per-record atomic; the pipeline never wraps a batch
/// in a transaction. A crash mid-batch leaves some records enriched and the
/// rest still matching the candidate filter, so a re-run picks up exactly
/// the unfinished work.
pub trait PlaceStore: Send + Sync {
    fn load_places(
        &self,
        ids: &[Uuid],
    ) -> impl Future<Output = Result<Vec<PlaceRecord>, StoreError>> + Send;

    fn update_address(
        &self,
        id: Uuid,
        address: &AddressComponents,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
