//! Database operations for the `places` table.

mod read;
mod types;
mod write;

pub use read::{list_candidate_place_ids, list_place_pins, list_places_by_public_ids};
pub use types::{NewPlace, PlacePinRow, PlaceRow};
pub use write::{insert_place, update_place_address};
