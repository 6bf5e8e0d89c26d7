use model::venue::Venue;
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

/// Table: venues
#[derive(Debug, Clone, FromRow)]
pub struct VenueRow {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub suburb: String,
    pub state: String,
    pub postcode: String,
    pub lat: f64,
    pub lng: f64,
}

impl DatabaseRow for VenueRow {
    type Model = Venue;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Venue {
            name: self.name,
            address: self.address,
            suburb: self.suburb,
            state: self.state,
            postcode: self.postcode,
            lat: self.lat,
            lng: self.lng,
        }
    }
}
