//! Provider payload types and the canonical address value object.

use serde::{Deserialize, Serialize};

/// Address section of a Nominatim reverse-geocoding response.
///
/// The provider's schema is heterogeneous: the settlement name may arrive
/// as `city`, `town`, or `village` depending on the place class, and the
/// sub-locality as `neighbourhood` or `suburb`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderAddress {
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub neighbourhood: Option<String>,
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
}

/// Top-level Nominatim `/reverse` response, reduced to the fields consumed
/// by the pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct ReverseGeocodeResponse {
    pub display_name: Option<String>,
    pub address: Option<ProviderAddress>,
}

/// Canonical address produced per resolution.
///
/// All fields optional: absence means "provider did not supply this field",
/// never a placeholder value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponents {
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
}

impl AddressComponents {
    /// True when the provider supplied none of the component fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.house_number.is_none()
            && self.district.is_none()
            && self.city.is_none()
            && self.county.is_none()
            && self.state.is_none()
            && self.country.is_none()
            && self.postcode.is_none()
    }
}

impl From<ProviderAddress> for AddressComponents {
    /// Normalize the provider schema: `road` → `street`, first of
    /// `neighbourhood`/`suburb` → `district`, first of `city`/`town`/
    /// `village` → `city`; the rest pass through unchanged.
    fn from(addr: ProviderAddress) -> Self {
        Self {
            street: addr.road,
            house_number: addr.house_number,
            district: addr.neighbourhood.or(addr.suburb),
            city: addr.city.or(addr.town).or(addr.village),
            county: addr.county,
            state: addr.state,
            country: addr.country,
            postcode: addr.postcode,
        }
    }
}
