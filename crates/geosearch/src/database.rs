use std::{error, result};

use async_trait::async_trait;
use model::{location::Location, region::Region, venue::Venue, WithDistance, WithId};
use serde::Serialize;
use utility::id::Id;

use crate::locator::Locator;

#[derive(Debug)]
pub enum DatabaseError {
    NotFound,
    Other(Box<dyn error::Error + Send + Sync>),
}

pub type Result<T> = result::Result<T, DatabaseError>;

/// Outcome of replacing a region's location set from a free-text postcode
/// list. The write happens even when some tokens do not resolve; the caller
/// decides what to do with the leftovers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostcodeResolution {
    pub linked: Vec<Id<Location>>,
    pub unresolved: Vec<String>,
}

#[async_trait]
pub trait LocationRepo {
    /// All locations whose postcode matches exactly. Empty vec when none do.
    async fn by_postcode(&self, postcode: &str) -> Result<Vec<WithId<Location>>>;

    /// First match under store-default ordering; postcodes are not unique.
    async fn first_by_postcode(
        &self,
        postcode: &str,
    ) -> Result<Option<WithId<Location>>>;

    /// Case-insensitive substring match across postcode, state and name.
    async fn by_keyword(
        &self,
        keyword: &str,
        limit: Option<i64>,
    ) -> Result<Vec<WithId<Location>>>;

    /// Locations within `radius_km` of the given reference location,
    /// ascending by distance.
    async fn find_within(
        &self,
        reference: &Location,
        radius_km: f64,
    ) -> Result<Vec<WithDistance<WithId<Location>>>>;

    /// Proximity search driven by a locator configuration.
    async fn nearest_locations(
        &self,
        locator: &Locator<Location>,
        latitude: f64,
        longitude: f64,
        radius_km: Option<f64>,
    ) -> Result<Vec<WithDistance<WithId<Location>>>>;
}

#[async_trait]
pub trait VenueRepo {
    async fn nearest_venues(
        &self,
        locator: &Locator<Venue>,
        latitude: f64,
        longitude: f64,
        radius_km: Option<f64>,
    ) -> Result<Vec<WithDistance<WithId<Venue>>>>;
}

#[async_trait]
pub trait RegionRepo {
    /// Replaces the region's full location association set with the
    /// locations resolvable from the postcode list. Destructive replace,
    /// not a merge; not atomic against concurrent writers.
    async fn replace_locations_from_postcodes(
        &self,
        region_id: Id<Region>,
        postcode_list: &str,
    ) -> Result<PostcodeResolution>;
}

/// A record store for the geolocation domain. Concurrent use happens by
/// cloning the store handle.
pub trait Database:
    LocationRepo + VenueRepo + RegionRepo + Clone + Send + Sync
{
}
