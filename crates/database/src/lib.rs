use std::env;

use async_trait::async_trait;
use geosearch::{
    database::{
        Database, DatabaseError, LocationRepo, PostcodeResolution, RegionRepo,
        Result, VenueRepo,
    },
    locator::Locator,
};
use model::{location::Location, region::Region, venue::Venue, WithDistance, WithId};
use utility::id::Id;

use data_model::{location::LocationRow, venue::VenueRow};

pub mod data_model;
pub mod queries;

pub struct DatabaseConnectionInfo {
    pub username: String,
    pub password: String,
    pub hostname: String,
    pub port: u16,
    pub database: String,
}

impl DatabaseConnectionInfo {
    pub fn from_env() -> Option<Self> {
        let username = env::var("DATABASE_USER").ok()?;
        let password = env::var("DATABASE_PASSWORD").ok()?;
        let hostname = env::var("DATABASE_HOST").ok()?;
        let port: u16 = env::var("DATABASE_PORT").ok()?.parse().ok()?;
        let database = env::var("DATABASE_NAME").ok()?;
        Some(Self {
            username,
            password,
            hostname,
            port,
            database,
        })
    }

    pub(self) fn postgres_url(self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.hostname, self.port, self.database
        )
    }
}

#[derive(Clone)]
pub struct PgDatabase {
    pool: sqlx::PgPool,
}

impl PgDatabase {
    pub async fn connect(
        database_connection_info: DatabaseConnectionInfo,
    ) -> Result<Self> {
        let url = database_connection_info.postgres_url();
        let pool = sqlx::postgres::PgPool::connect(&url)
            .await
            .map_err(|why| DatabaseError::Other(Box::new(why)))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|why| DatabaseError::Other(Box::new(why)))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl LocationRepo for PgDatabase {
    async fn by_postcode(&self, postcode: &str) -> Result<Vec<WithId<Location>>> {
        queries::location::by_postcode(&self.pool, postcode).await
    }

    async fn first_by_postcode(
        &self,
        postcode: &str,
    ) -> Result<Option<WithId<Location>>> {
        queries::location::first_by_postcode(&self.pool, postcode).await
    }

    async fn by_keyword(
        &self,
        keyword: &str,
        limit: Option<i64>,
    ) -> Result<Vec<WithId<Location>>> {
        queries::location::by_keyword(&self.pool, keyword, limit).await
    }

    async fn find_within(
        &self,
        reference: &Location,
        radius_km: f64,
    ) -> Result<Vec<WithDistance<WithId<Location>>>> {
        queries::proximity::search_within::<_, LocationRow>(
            &self.pool,
            &Locator::locations(),
            reference.latitude,
            reference.longitude,
            radius_km,
        )
        .await
    }

    async fn nearest_locations(
        &self,
        locator: &Locator<Location>,
        latitude: f64,
        longitude: f64,
        radius_km: Option<f64>,
    ) -> Result<Vec<WithDistance<WithId<Location>>>> {
        queries::proximity::search_within::<_, LocationRow>(
            &self.pool,
            locator,
            latitude,
            longitude,
            locator.radius_or_default(radius_km),
        )
        .await
    }
}

#[async_trait]
impl VenueRepo for PgDatabase {
    async fn nearest_venues(
        &self,
        locator: &Locator<Venue>,
        latitude: f64,
        longitude: f64,
        radius_km: Option<f64>,
    ) -> Result<Vec<WithDistance<WithId<Venue>>>> {
        queries::proximity::search_within::<_, VenueRow>(
            &self.pool,
            locator,
            latitude,
            longitude,
            locator.radius_or_default(radius_km),
        )
        .await
    }
}

#[async_trait]
impl RegionRepo for PgDatabase {
    async fn replace_locations_from_postcodes(
        &self,
        region_id: Id<Region>,
        postcode_list: &str,
    ) -> Result<PostcodeResolution> {
        queries::region::replace_locations(&self.pool, region_id, postcode_list)
            .await
    }
}

impl Database for PgDatabase {}
