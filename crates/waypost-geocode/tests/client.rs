//! Integration tests for `NominatimClient` and `Resolver` using wiremock
//! HTTP mocks.

use std::sync::Arc;

use waypost_geocode::{
    AddressComponents, GeocodeError, NominatimClient, RateLimiter, Resolver, ReverseGeocoder,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> NominatimClient {
    NominatimClient::with_base_url("waypost-test/0.1", 1, base_url)
        .expect("client construction should not fail")
}

fn test_resolver(base_url: &str) -> Resolver {
    Resolver::new(
        test_client(base_url),
        Arc::new(RateLimiter::unthrottled()),
        "en",
    )
}

#[tokio::test]
async fn reverse_returns_parsed_address_payload() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "display_name": "12, Main St, Old Town, Metropolis",
        "address": {
            "house_number": "12",
            "road": "Main St",
            "neighbourhood": "Old Town",
            "city": "Metropolis",
            "state": "New Troy",
            "country": "USA",
            "postcode": "10001"
        }
    });

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("format", "json"))
        .and(query_param("lat", "40.7128"))
        .and(query_param("lon", "-74.006"))
        .and(query_param("addressdetails", "1"))
        .and(query_param("accept-language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = client
        .reverse(40.7128, -74.006, "en")
        .await
        .expect("should parse payload");

    let address = payload.address.expect("address section present");
    assert_eq!(address.road.as_deref(), Some("Main St"));
    assert_eq!(address.house_number.as_deref(), Some("12"));
    assert_eq!(address.city.as_deref(), Some("Metropolis"));

    let components = AddressComponents::from(address);
    assert_eq!(components.street.as_deref(), Some("Main St"));
    assert_eq!(components.district.as_deref(), Some("Old Town"));
    assert_eq!(components.postcode.as_deref(), Some("10001"));
}

#[tokio::test]
async fn provider_error_status_is_passed_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.reverse(52.52, 13.405, "en").await;
    assert!(
        matches!(result, Err(GeocodeError::UnexpectedStatus { status: 502, .. })),
        "expected UnexpectedStatus(502), got: {result:?}"
    );
}

#[tokio::test]
async fn missing_address_section_maps_to_no_address() {
    let server = MockServer::start().await;

    // Nominatim answers 200 with an error body for water coordinates.
    let body = serde_json::json!({
        "display_name": null
    });

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.reverse(0.0, 0.0, "en").await;
    assert!(
        matches!(result, Err(GeocodeError::NoAddress { .. })),
        "expected NoAddress, got: {result:?}"
    );
}

#[tokio::test]
async fn slow_provider_response_maps_to_timeout() {
    let server = MockServer::start().await;

    // Client deadline is 1s; the mock stalls for 3s.
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"display_name": null}))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.reverse(52.52, 13.405, "en").await;
    assert!(
        matches!(result, Err(GeocodeError::Timeout { .. })),
        "expected Timeout, got: {result:?}"
    );
}

#[tokio::test]
async fn malformed_body_maps_to_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.reverse(52.52, 13.405, "en").await;
    assert!(
        matches!(result, Err(GeocodeError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

#[tokio::test]
async fn resolver_collapses_no_address_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"display_name": null})),
        )
        .mount(&server)
        .await;

    let resolver = test_resolver(&server.uri());
    let result = resolver.reverse_lookup(0.0, 0.0).await;
    assert!(
        matches!(result, Ok(None)),
        "expected Ok(None), got: {result:?}"
    );
}

#[tokio::test]
async fn resolver_collapses_empty_address_object_to_none() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "display_name": "somewhere",
        "address": {}
    });

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let resolver = test_resolver(&server.uri());
    let result = resolver.reverse_lookup(1.0, 1.0).await;
    assert!(
        matches!(result, Ok(None)),
        "expected Ok(None), got: {result:?}"
    );
}

#[tokio::test]
async fn resolver_surfaces_transport_failures_as_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let resolver = test_resolver(&server.uri());
    let result = resolver.reverse_lookup(52.52, 13.405).await;
    assert!(
        matches!(result, Err(GeocodeError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}

#[tokio::test]
async fn resolver_normalizes_successful_payload() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "display_name": "Marktplatz, Smallville",
        "address": {
            "road": "Marktplatz",
            "town": "Smallville",
            "suburb": "Westside",
            "postcode": "01234"
        }
    });

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let resolver = test_resolver(&server.uri());
    let components = resolver
        .reverse_lookup(51.0, 12.0)
        .await
        .expect("lookup should succeed")
        .expect("address expected");

    assert_eq!(components.street.as_deref(), Some("Marktplatz"));
    assert_eq!(components.city.as_deref(), Some("Smallville"));
    assert_eq!(components.district.as_deref(), Some("Westside"));
    assert_eq!(components.postcode.as_deref(), Some("01234"));
    assert!(components.house_number.is_none());
}
