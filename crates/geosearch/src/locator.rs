use indexmap::IndexMap;
use model::{location::Location, venue::Venue, WithDistance, WithId};
use utility::id::HasId;

/// Radius applied when a proximity search does not specify one.
pub const DEFAULT_RADIUS_KM: f64 = 20.0;

/// Attribute set rendered for one proximity-search result.
pub type MarkerAttributes = IndexMap<String, String>;

/// Strategy configuration for proximity searches against one record type.
///
/// Record types differ in table name, coordinate column naming and in how a
/// result is projected into marker attributes; the query construction is
/// shared. Plain data plus a projection function, no dispatch hierarchy.
pub struct Locator<T: HasId<IdType = i64>> {
    pub table: &'static str,
    pub columns: &'static [&'static str],
    pub latitude_field: String,
    pub longitude_field: String,
    pub default_radius_km: f64,
    projection: fn(&WithDistance<WithId<T>>) -> MarkerAttributes,
}

// manual impl: deriving would put a `T: Clone` bound on the phantom type
impl<T: HasId<IdType = i64>> Clone for Locator<T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table,
            columns: self.columns,
            latitude_field: self.latitude_field.clone(),
            longitude_field: self.longitude_field.clone(),
            default_radius_km: self.default_radius_km,
            projection: self.projection,
        }
    }
}

impl<T: HasId<IdType = i64>> Locator<T> {
    /// Overrides the coordinate column names, each optionally
    /// table-qualified.
    pub fn with_coordinate_fields(
        mut self,
        latitude_field: impl Into<String>,
        longitude_field: impl Into<String>,
    ) -> Self {
        self.latitude_field = latitude_field.into();
        self.longitude_field = longitude_field.into();
        self
    }

    pub fn radius_or_default(&self, radius_km: Option<f64>) -> f64 {
        radius_km.unwrap_or(self.default_radius_km)
    }

    pub fn marker_attributes(
        &self,
        result: &WithDistance<WithId<T>>,
    ) -> MarkerAttributes {
        (self.projection)(result)
    }
}

impl Locator<Location> {
    pub fn locations() -> Self {
        Self {
            table: "locations",
            columns: &[
                "id",
                "name",
                "state",
                "location_type",
                "postcode",
                "latitude",
                "longitude",
            ],
            latitude_field: "locations.latitude".to_owned(),
            longitude_field: "locations.longitude".to_owned(),
            default_radius_km: DEFAULT_RADIUS_KM,
            projection: location_marker,
        }
    }
}

impl Locator<Venue> {
    pub fn venues() -> Self {
        Self {
            table: "venues",
            columns: &[
                "id",
                "name",
                "address",
                "suburb",
                "state",
                "postcode",
                "lat",
                "lng",
            ],
            latitude_field: "venues.lat".to_owned(),
            longitude_field: "venues.lng".to_owned(),
            default_radius_km: DEFAULT_RADIUS_KM,
            projection: venue_marker,
        }
    }
}

fn location_marker(result: &WithDistance<WithId<Location>>) -> MarkerAttributes {
    let location = &result.content.content;
    IndexMap::from([
        ("name".to_owned(), location.name.clone()),
        ("lat".to_owned(), location.latitude.to_string()),
        ("lng".to_owned(), location.longitude.to_string()),
    ])
}

fn venue_marker(result: &WithDistance<WithId<Venue>>) -> MarkerAttributes {
    let venue = &result.content.content;
    IndexMap::from([
        ("name".to_owned(), venue.name.clone()),
        ("address".to_owned(), venue.full_address()),
        ("lat".to_owned(), venue.lat.to_string()),
        ("lng".to_owned(), venue.lng.to_string()),
    ])
}
