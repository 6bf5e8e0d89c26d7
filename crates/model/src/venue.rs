use serde::{Deserialize, Serialize};
use utility::id::HasId;

/// A point of interest with a street address. Its coordinate columns are
/// named `lat`/`lng` rather than `latitude`/`longitude`, which is what the
/// specialized locator configuration exists for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub name: String,
    pub address: String,
    pub suburb: String,
    pub state: String,
    pub postcode: String,
    pub lat: f64,
    pub lng: f64,
}

impl Venue {
    /// Single-line postal address used as the marker `address` attribute.
    pub fn full_address(&self) -> String {
        format!(
            "{}, {} {} {}",
            self.address, self.suburb, self.state, self.postcode
        )
    }
}

impl HasId for Venue {
    type IdType = i64;
}
