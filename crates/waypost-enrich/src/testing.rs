//! In-memory fakes for the pipeline's two ports.

use std::collections::{HashSet, VecDeque};
use std::future::Future;

use tokio::sync::Mutex;
use uuid::Uuid;
use waypost_geocode::{AddressComponents, GeocodeError, ReverseGeocoder};

use crate::store::{PlaceRecord, PlaceStore, StoreError};

pub(crate) fn address(street: &str, city: &str) -> AddressComponents {
    AddressComponents {
        street: Some(street.to_owned()),
        city: Some(city.to_owned()),
        ..AddressComponents::default()
    }
}

pub(crate) fn timeout_error() -> GeocodeError {
    GeocodeError::Timeout {
        url: "http://provider.test/reverse".to_owned(),
    }
}

pub(crate) fn place_without_address() -> PlaceRecord {
    PlaceRecord {
        id: Uuid::new_v4(),
        name: "Corner Cafe".to_owned(),
        latitude: 52.52,
        longitude: 13.405,
        street: None,
        city: None,
    }
}

pub(crate) fn place_with_address() -> PlaceRecord {
    PlaceRecord {
        id: Uuid::new_v4(),
        name: "Corner Cafe".to_owned(),
        latitude: 52.52,
        longitude: 13.405,
        street: Some("Main St".to_owned()),
        city: Some("Metropolis".to_owned()),
    }
}

/// Geocoder that replays a fixed sequence of outcomes; panics if called
/// more often than scripted.
pub(crate) struct ScriptedGeocoder {
    outcomes: Mutex<VecDeque<Result<Option<AddressComponents>, GeocodeError>>>,
}

impl ScriptedGeocoder {
    pub(crate) fn new(outcomes: Vec<Result<Option<AddressComponents>, GeocodeError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
        }
    }
}

impl ReverseGeocoder for ScriptedGeocoder {
    fn reverse_lookup(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> impl Future<Output = Result<Option<AddressComponents>, GeocodeError>> + Send {
        async move {
            self.outcomes
                .lock()
                .await
                .pop_front()
                .expect("geocoder called more times than scripted")
        }
    }
}

/// Record store over a plain `Vec`, with switchable failure modes.
pub(crate) struct InMemoryStore {
    places: Vec<PlaceRecord>,
    fail_updates: HashSet<Uuid>,
    fail_loads: bool,
    pub(crate) updates: Mutex<Vec<(Uuid, AddressComponents)>>,
}

impl InMemoryStore {
    pub(crate) fn new(places: Vec<PlaceRecord>) -> Self {
        Self {
            places,
            fail_updates: HashSet::new(),
            fail_loads: false,
            updates: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing_updates(mut self, ids: &[Uuid]) -> Self {
        self.fail_updates.extend(ids.iter().copied());
        self
    }

    pub(crate) fn failing_loads(mut self) -> Self {
        self.fail_loads = true;
        self
    }
}

impl PlaceStore for InMemoryStore {
    fn load_places(
        &self,
        ids: &[Uuid],
    ) -> impl Future<Output = Result<Vec<PlaceRecord>, StoreError>> + Send {
        let found: Vec<PlaceRecord> = ids
            .iter()
            .filter_map(|id| self.places.iter().find(|p| p.id == *id).cloned())
            .collect();
        let fail = self.fail_loads;
        async move {
            if fail {
                return Err(StoreError::new("store unavailable"));
            }
            Ok(found)
        }
    }

    fn update_address(
        &self,
        id: Uuid,
        address: &AddressComponents,
    ) -> impl Future<Output = Result<(), StoreError>> + Send {
        let address = address.clone();
        async move {
            if self.fail_updates.contains(&id) {
                return Err(StoreError::new(format!("update rejected for {id}")));
            }
            self.updates.lock().await.push((id, address));
            Ok(())
        }
    }
}
