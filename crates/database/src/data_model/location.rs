use model::location::Location;
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

/// Table: locations
#[derive(Debug, Clone, FromRow)]
pub struct LocationRow {
    pub id: i64,
    pub name: String,
    pub state: String,
    pub location_type: String,
    pub postcode: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl DatabaseRow for LocationRow {
    type Model = Location;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Location {
            name: self.name,
            state: self.state,
            location_type: self.location_type,
            postcode: self.postcode,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
