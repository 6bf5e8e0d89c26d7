use serde::{Deserialize, Serialize};
use utility::{geo::spherical_distance, id::HasId};

use crate::WithDistance;

/// A named geographic point with a postal code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    pub state: String,
    pub location_type: String,
    pub postcode: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Display title in the form `"{name}, {state} {postcode}"`.
    pub fn full_title(&self) -> String {
        format!("{}, {} {}", self.name, self.state, self.postcode)
    }

    /// The name lowercased with every word's first letter uppercased.
    pub fn name_capitalised(&self) -> String {
        let mut result = String::with_capacity(self.name.len());
        let mut at_word_start = true;
        for c in self.name.to_lowercase().chars() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.push(c);
            }
            at_word_start = c.is_whitespace();
        }
        result
    }

    pub fn with_distance_to(
        self,
        latitude: f64,
        longitude: f64,
    ) -> WithDistance<Location> {
        let distance = spherical_distance(
            latitude,
            longitude,
            self.latitude,
            self.longitude,
        );
        WithDistance::new(distance, self)
    }
}

impl HasId for Location {
    type IdType = i64;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn richmond() -> Location {
        Location {
            name: "Richmond".to_owned(),
            state: "VIC".to_owned(),
            location_type: "Suburb".to_owned(),
            postcode: "3121".to_owned(),
            latitude: -37.8182,
            longitude: 145.0017,
        }
    }

    #[test]
    fn full_title_formats_name_state_postcode() {
        assert_eq!(richmond().full_title(), "Richmond, VIC 3121");
    }

    #[test]
    fn name_capitalised_uppercases_each_word() {
        let mut location = richmond();
        location.name = "NORTH melbourne".to_owned();
        assert_eq!(location.name_capitalised(), "North Melbourne");
    }

    #[test]
    fn with_distance_to_own_coordinates_is_zero() {
        let location = richmond();
        let (lat, lon) = (location.latitude, location.longitude);
        let result = location.with_distance_to(lat, lon);
        assert!(result.distance_km.abs() < 1e-6);
    }
}
