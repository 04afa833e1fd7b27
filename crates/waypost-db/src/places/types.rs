//! Row types for the `places` table.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Input record for inserting a place. Coordinates are required; address
/// columns start out empty and are filled in by the enrichment pipeline.
#[derive(Debug, Clone)]
pub struct NewPlace {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A row from the `places` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlaceRow {
    pub id: i64,
    pub public_id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A pin row for the directory map: identity, display name, coordinates,
/// and whatever address parts are known.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlacePinRow {
    pub public_id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
}
