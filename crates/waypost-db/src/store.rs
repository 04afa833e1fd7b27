//! Postgres adapter for the enrichment pipeline's record-store port.

use std::future::Future;

use sqlx::PgPool;
use uuid::Uuid;
use waypost_enrich::{PlaceRecord, PlaceStore, StoreError};
use waypost_geocode::AddressComponents;

use crate::places;

/// [`PlaceStore`] backed by the `places` table.
#[derive(Clone)]
pub struct PgPlaceStore {
    pool: PgPool,
}

impl PgPlaceStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PlaceStore for PgPlaceStore {
    fn load_places(
        &self,
        ids: &[Uuid],
    ) -> impl Future<Output = Result<Vec<PlaceRecord>, StoreError>> + Send {
        let ids = ids.to_vec();
        async move {
            let rows = places::list_places_by_public_ids(&self.pool, &ids)
                .await
                .map_err(StoreError::new)?;
            Ok(rows
                .into_iter()
                .map(|row| PlaceRecord {
                    id: row.public_id,
                    name: row.name,
                    latitude: row.latitude,
                    longitude: row.longitude,
                    street: row.street,
                    city: row.city,
                })
                .collect())
        }
    }

    fn update_address(
        &self,
        id: Uuid,
        address: &AddressComponents,
    ) -> impl Future<Output = Result<(), StoreError>> + Send {
        let address = address.clone();
        async move {
            places::update_place_address(&self.pool, id, &address)
                .await
                .map_err(StoreError::new)
        }
    }
}
