//! Live integration tests for waypost-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/waypost-db/`), so `"../../migrations"` resolves to the workspace
//! migration directory.

use uuid::Uuid;
use waypost_db::{
    insert_place, list_candidate_place_ids, list_place_pins, list_places_by_public_ids,
    update_place_address, DbError, NewPlace,
};
use waypost_enrich::PlaceStore;
use waypost_geocode::AddressComponents;

fn new_place(name: &str) -> NewPlace {
    NewPlace {
        name: name.to_string(),
        latitude: 52.52,
        longitude: 13.405,
    }
}

fn full_address() -> AddressComponents {
    AddressComponents {
        street: Some("Main St".to_string()),
        house_number: Some("12".to_string()),
        city: Some("Metropolis".to_string()),
        postcode: Some("10001".to_string()),
        ..AddressComponents::default()
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn insert_and_fetch_by_public_id(pool: sqlx::PgPool) {
    let inserted = insert_place(&pool, &new_place("Corner Cafe"))
        .await
        .expect("insert place");

    let rows = list_places_by_public_ids(&pool, &[inserted.public_id])
        .await
        .expect("fetch by public id");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Corner Cafe");
    assert!(rows[0].street.is_none());
    assert!(rows[0].city.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn unknown_public_ids_return_empty(pool: sqlx::PgPool) {
    let rows = list_places_by_public_ids(&pool, &[Uuid::new_v4()])
        .await
        .expect("query should succeed");
    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_address_writes_all_components(pool: sqlx::PgPool) {
    let inserted = insert_place(&pool, &new_place("Corner Cafe"))
        .await
        .expect("insert place");

    update_place_address(&pool, inserted.public_id, &full_address())
        .await
        .expect("update address");

    let rows = list_places_by_public_ids(&pool, &[inserted.public_id])
        .await
        .expect("fetch back");
    assert_eq!(rows[0].street.as_deref(), Some("Main St"));
    assert_eq!(rows[0].house_number.as_deref(), Some("12"));
    assert_eq!(rows[0].city.as_deref(), Some("Metropolis"));
    assert_eq!(rows[0].postcode.as_deref(), Some("10001"));
    assert!(rows[0].county.is_none(), "absent components stay NULL");
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_address_for_missing_place_is_not_found(pool: sqlx::PgPool) {
    let result = update_place_address(&pool, Uuid::new_v4(), &full_address()).await;
    assert!(matches!(result, Err(DbError::NotFound)));
}

#[sqlx::test(migrations = "../../migrations")]
async fn candidate_selection_tracks_address_completeness(pool: sqlx::PgPool) {
    let incomplete = insert_place(&pool, &new_place("Needs Address"))
        .await
        .expect("insert");
    let completed = insert_place(&pool, &new_place("Has Address"))
        .await
        .expect("insert");
    update_place_address(&pool, completed.public_id, &full_address())
        .await
        .expect("update");

    let candidates = list_candidate_place_ids(&pool, 10).await.expect("query");
    assert_eq!(candidates, vec![incomplete.public_id]);

    // Enriching the remaining candidate empties the work queue.
    update_place_address(&pool, incomplete.public_id, &full_address())
        .await
        .expect("update");
    let candidates = list_candidate_place_ids(&pool, 10).await.expect("query");
    assert!(candidates.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn pins_include_known_address_parts(pool: sqlx::PgPool) {
    let inserted = insert_place(&pool, &new_place("Corner Cafe"))
        .await
        .expect("insert");
    update_place_address(&pool, inserted.public_id, &full_address())
        .await
        .expect("update");

    let pins = list_place_pins(&pool).await.expect("pins");
    assert_eq!(pins.len(), 1);
    assert_eq!(pins[0].street.as_deref(), Some("Main St"));
    assert_eq!(pins[0].name, "Corner Cafe");
}

#[sqlx::test(migrations = "../../migrations")]
async fn pg_place_store_round_trips_through_the_port(pool: sqlx::PgPool) {
    let inserted = insert_place(&pool, &new_place("Corner Cafe"))
        .await
        .expect("insert");

    let store = waypost_db::PgPlaceStore::new(pool.clone());
    let records = store
        .load_places(&[inserted.public_id])
        .await
        .expect("load through port");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, inserted.public_id);
    assert!(records[0].needs_address());

    store
        .update_address(inserted.public_id, &full_address())
        .await
        .expect("update through port");

    let records = store
        .load_places(&[inserted.public_id])
        .await
        .expect("reload");
    assert!(!records[0].needs_address());
}

#[sqlx::test(migrations = "../../migrations")]
async fn pg_place_store_update_of_missing_place_errors(pool: sqlx::PgPool) {
    let store = waypost_db::PgPlaceStore::new(pool);
    let result = store.update_address(Uuid::new_v4(), &full_address()).await;
    assert!(result.is_err(), "expected a store error, got: {result:?}");
}
