//! HTTP client for the Nominatim reverse-geocoding API.
//!
//! Wraps `reqwest` with typed error handling and response deserialization.
//! Provider HTTP status codes are surfaced 1:1 as
//! [`GeocodeError::UnexpectedStatus`], a request exceeding the configured
//! deadline becomes [`GeocodeError::Timeout`], and a 2xx payload without an
//! address section becomes [`GeocodeError::NoAddress`] — callers above the
//! resolver never see these distinctions, but they are preserved here.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::ReverseGeocodeResponse;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";

/// Client for the Nominatim `/reverse` endpoint.
///
/// Use [`NominatimClient::new`] for production or
/// [`NominatimClient::with_base_url`] to point at a mock server in tests.
/// The provider requires a client-identifying `User-Agent`; it is set once
/// at construction.
pub struct NominatimClient {
    client: Client,
    reverse_url: Url,
}

impl NominatimClient {
    /// Creates a new client pointed at the public Nominatim instance.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_base_url(user_agent, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock,
    /// or a self-hosted provider instance).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        user_agent: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the endpoint rather than replacing the last path
        // segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let reverse_url = Url::parse(&normalised)
            .and_then(|base| base.join("reverse"))
            .map_err(|e| GeocodeError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            reverse_url,
        })
    }

    /// Resolves one coordinate pair to the provider's raw address payload.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::InvalidCoordinates`] for non-finite or out-of-range
    ///   input; no request is issued.
    /// - [`GeocodeError::Timeout`] if the request exceeds the deadline.
    /// - [`GeocodeError::UnexpectedStatus`] for any non-2xx provider status.
    /// - [`GeocodeError::NoAddress`] for a 2xx payload without an `address`
    ///   section.
    /// - [`GeocodeError::Http`] / [`GeocodeError::Deserialize`] on network
    ///   failure or a malformed body.
    pub async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
        language: &str,
    ) -> Result<ReverseGeocodeResponse, GeocodeError> {
        if !coordinates_valid(latitude, longitude) {
            return Err(GeocodeError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        let url = self.build_url(latitude, longitude, language);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_transport(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_transport(e, &url))?;
        let payload: ReverseGeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        if payload.address.is_none() {
            return Err(GeocodeError::NoAddress {
                latitude,
                longitude,
            });
        }

        Ok(payload)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters via [`Url::query_pairs_mut`].
    fn build_url(&self, latitude: f64, longitude: f64, language: &str) -> Url {
        let mut url = self.reverse_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("format", "json");
            pairs.append_pair("lat", &latitude.to_string());
            pairs.append_pair("lon", &longitude.to_string());
            pairs.append_pair("addressdetails", "1");
            pairs.append_pair("accept-language", language);
        }
        url
    }
}

fn coordinates_valid(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && latitude.abs() <= 90.0
        && longitude.abs() <= 180.0
}

fn classify_transport(err: reqwest::Error, url: &Url) -> GeocodeError {
    if err.is_timeout() {
        GeocodeError::Timeout {
            url: url.to_string(),
        }
    } else {
        GeocodeError::Http(err)
    }
}
