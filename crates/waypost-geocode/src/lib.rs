//! Reverse-geocoding client for the Nominatim HTTP API.
//!
//! Three layers, innermost first:
//!
//! - [`RateLimiter`] paces outbound provider calls to the published rate
//!   contract (one request per `min_interval`), process-wide.
//! - [`NominatimClient`] wraps `reqwest` with typed error handling. It keeps
//!   the full failure taxonomy: timeouts, provider status codes passed
//!   through 1:1, missing-address payloads, and malformed bodies are all
//!   distinct [`GeocodeError`] variants.
//! - [`Resolver`] (the production [`ReverseGeocoder`]) throttles, calls the
//!   client, and degrades "provider has no address here" to `Ok(None)` —
//!   callers see an absent address as a valid outcome, while transport-class
//!   failures stay on the error channel.

pub mod client;
pub mod error;
pub mod limiter;
pub mod resolver;
pub mod types;

pub use client::NominatimClient;
pub use error::GeocodeError;
pub use limiter::RateLimiter;
pub use resolver::{Resolver, ReverseGeocoder};
pub use types::{AddressComponents, ProviderAddress, ReverseGeocodeResponse};
