use std::fmt::Debug;

use model::WithId;
use serde::Serialize;
use sqlx::{postgres::PgRow, FromRow, Row};
use utility::id::{HasId, Id};

pub mod location;
pub mod venue;

pub trait DatabaseRow {
    type Model: Serialize + HasId;

    fn get_id(&self) -> Id<Self::Model>;
    fn to_model(self) -> Self::Model;
}

pub fn with_ids<R: DatabaseRow>(rows: Vec<R>) -> Vec<WithId<R::Model>>
where
    <R::Model as HasId>::IdType: Debug + Clone + Serialize,
{
    rows.into_iter().map(|row| with_id(row)).collect::<Vec<_>>()
}

pub fn with_id<R: DatabaseRow>(row: R) -> WithId<R::Model>
where
    <R::Model as HasId>::IdType: Debug + Clone + Serialize,
{
    WithId::new(row.get_id(), row.to_model())
}

/// A base row plus the computed `distance` column that proximity queries
/// append to the select list. Composed by hand because the base row types
/// have no such column.
pub struct DistanceRow<R> {
    pub distance_km: f64,
    pub row: R,
}

impl<'r, R> FromRow<'r, PgRow> for DistanceRow<R>
where
    R: FromRow<'r, PgRow>,
{
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            distance_km: row.try_get("distance")?,
            row: R::from_row(row)?,
        })
    }
}
