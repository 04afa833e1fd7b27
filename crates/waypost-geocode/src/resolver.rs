//! Single-coordinate resolution behind a substitutable trait.

use std::future::Future;
use std::sync::Arc;

use crate::client::NominatimClient;
use crate::error::GeocodeError;
use crate::limiter::RateLimiter;
use crate::types::AddressComponents;

/// Turns one coordinate pair into a normalized address.
///
/// `Ok(None)` means the provider has no address for the coordinates — a
/// valid outcome, not a failure. Transport-class failures (timeout, bad
/// status, malformed payload) come back as `Err`, the single per-item fault
/// channel consumed by the batch orchestrator and the enrichment service.
pub trait ReverseGeocoder: Send + Sync {
    fn reverse_lookup(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> impl Future<Output = Result<Option<AddressComponents>, GeocodeError>> + Send;
}

/// Production resolver: rate-limited Nominatim lookups.
///
/// Holds a shared [`RateLimiter`] so that every resolver in the process
/// draws from the same pacing window. Construct once at startup and reuse.
pub struct Resolver {
    client: NominatimClient,
    limiter: Arc<RateLimiter>,
    language: String,
}

impl Resolver {
    pub fn new(
        client: NominatimClient,
        limiter: Arc<RateLimiter>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            client,
            limiter,
            language: language.into(),
        }
    }
}

impl ReverseGeocoder for Resolver {
    fn reverse_lookup(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> impl Future<Output = Result<Option<AddressComponents>, GeocodeError>> + Send {
        async move {
            self.limiter.throttle().await;

            match self.client.reverse(latitude, longitude, &self.language).await {
                Ok(payload) => {
                    let components = payload
                        .address
                        .map(AddressComponents::from)
                        .filter(|c| !c.is_empty());
                    if components.is_none() {
                        tracing::debug!(latitude, longitude, "provider returned an empty address");
                    }
                    Ok(components)
                }
                Err(GeocodeError::NoAddress { .. }) => {
                    tracing::debug!(latitude, longitude, "no address for coordinates");
                    Ok(None)
                }
                Err(e) => {
                    tracing::warn!(latitude, longitude, error = %e, "reverse geocoding failed");
                    Err(e)
                }
            }
        }
    }
}
