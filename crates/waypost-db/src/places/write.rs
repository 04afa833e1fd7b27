//! Write operations for the `places` table.

use sqlx::PgPool;
use uuid::Uuid;
use waypost_geocode::AddressComponents;

use super::types::{NewPlace, PlaceRow};
use crate::DbError;

/// Insert a place with coordinates only; address columns start empty.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the insert fails.
pub async fn insert_place(pool: &PgPool, place: &NewPlace) -> Result<PlaceRow, sqlx::Error> {
    sqlx::query_as::<_, PlaceRow>(
        "INSERT INTO places (name, latitude, longitude) \
         VALUES ($1, $2, $3) \
         RETURNING id, public_id, name, latitude, longitude, \
                   street, house_number, district, city, county, state, country, postcode, \
                   created_at, updated_at",
    )
    .bind(&place.name)
    .bind(place.latitude)
    .bind(place.longitude)
    .fetch_one(pool)
    .await
}

/// Write resolved address components to one place, keyed by public id.
///
/// Absent components write NULL, so the row always reflects exactly what
/// the provider supplied. Single-row atomic update; the pipeline never
/// wraps a batch in a transaction.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no row matches `public_id`, or
/// [`DbError::Sqlx`] if the update fails.
pub async fn update_place_address(
    pool: &PgPool,
    public_id: Uuid,
    address: &AddressComponents,
) -> Result<(), DbError> {
    let rows_affected = sqlx::query(
        "UPDATE places \
         SET street       = $2, \
             house_number = $3, \
             district     = $4, \
             city         = $5, \
             county       = $6, \
             state        = $7, \
             country      = $8, \
             postcode     = $9, \
             updated_at   = NOW() \
         WHERE public_id = $1",
    )
    .bind(public_id)
    .bind(&address.street)
    .bind(&address.house_number)
    .bind(&address.district)
    .bind(&address.city)
    .bind(&address.county)
    .bind(&address.state)
    .bind(&address.country)
    .bind(&address.postcode)
    .execute(pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        return Err(DbError::NotFound);
    }
    Ok(())
}
