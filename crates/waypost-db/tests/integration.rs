//! Offline unit tests for waypost-db pool configuration and row types.
//! These tests do not require a live database connection.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use waypost_core::{AppConfig, Environment, GeocoderConfig};
use waypost_db::{PlacePinRow, PlaceRow, PoolConfig};

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
        geocoder: GeocoderConfig {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "ua".to_string(),
            min_interval_ms: 1000,
            request_timeout_secs: 5,
            language: "en".to_string(),
        },
        enrich_backfill_limit: 100,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

/// Compile-time smoke test: confirm that [`PlaceRow`] has all expected
/// fields with the correct types. No database required.
#[test]
fn place_row_has_expected_fields() {
    use chrono::Utc;
    use uuid::Uuid;

    let row = PlaceRow {
        id: 1_i64,
        public_id: Uuid::new_v4(),
        name: "Corner Cafe".to_string(),
        latitude: 52.52,
        longitude: 13.405,
        street: None,
        house_number: None,
        district: None,
        city: None,
        county: None,
        state: None,
        country: None,
        postcode: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    assert_eq!(row.id, 1);
    assert_eq!(row.name, "Corner Cafe");
    assert!(row.street.is_none());
    assert!(row.city.is_none());
}

#[test]
fn place_pin_row_has_expected_fields() {
    use uuid::Uuid;

    let row = PlacePinRow {
        public_id: Uuid::new_v4(),
        name: "Corner Cafe".to_string(),
        latitude: 52.52,
        longitude: 13.405,
        street: Some("Main St".to_string()),
        house_number: Some("12".to_string()),
        city: Some("Metropolis".to_string()),
        postcode: None,
    };

    assert_eq!(row.street.as_deref(), Some("Main St"));
    assert!((row.latitude - 52.52).abs() < f64::EPSILON);
}
