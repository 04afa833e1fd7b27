//! Read operations for the `places` table.

use sqlx::PgPool;
use uuid::Uuid;

use super::types::{PlacePinRow, PlaceRow};

/// Fetch places by their public ids. Ids with no matching row are simply
/// absent from the result; the order is the table's, not the input's.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_places_by_public_ids(
    pool: &PgPool,
    public_ids: &[Uuid],
) -> Result<Vec<PlaceRow>, sqlx::Error> {
    sqlx::query_as::<_, PlaceRow>(
        "SELECT id, public_id, name, latitude, longitude, \
                street, house_number, district, city, county, state, country, postcode, \
                created_at, updated_at \
         FROM places \
         WHERE public_id = ANY($1) \
         ORDER BY id",
    )
    .bind(public_ids)
    .fetch_all(pool)
    .await
}

/// Public ids of places still missing street or city, oldest first.
///
/// Used by bulk backfills (CLI `--all`, the nightly job) to pick the next
/// slice of work. Address completeness is the sole "still needs work"
/// indicator, so repeated runs converge.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_candidate_place_ids(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        "SELECT public_id \
         FROM places \
         WHERE street IS NULL OR city IS NULL \
         ORDER BY created_at \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// All places as map pins, newest first.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_place_pins(pool: &PgPool) -> Result<Vec<PlacePinRow>, sqlx::Error> {
    sqlx::query_as::<_, PlacePinRow>(
        "SELECT public_id, name, latitude, longitude, \
                street, house_number, city, postcode \
         FROM places \
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}
