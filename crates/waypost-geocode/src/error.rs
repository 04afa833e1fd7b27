use thiserror::Error;

/// Errors returned by the reverse-geocoding client.
///
/// The client preserves the provider's failure modes as distinct variants;
/// the resolver above it decides which ones degrade to "no address".
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request exceeded the configured deadline.
    #[error("reverse geocoding request to {url} timed out")]
    Timeout { url: String },

    /// Non-success provider status, passed through unchanged.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The provider answered 2xx but the payload has no address section.
    #[error("no address in provider response for ({latitude}, {longitude})")]
    NoAddress { latitude: f64, longitude: f64 },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Coordinates outside the valid range, or not finite. No request is made.
    #[error("invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// The configured base URL does not parse.
    #[error("invalid geocoder base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
