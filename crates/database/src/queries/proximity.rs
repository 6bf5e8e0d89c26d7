use geosearch::{database::Result, locator::Locator};
use model::{WithDistance, WithId};
use sqlx::{postgres::PgRow, Executor, FromRow, Postgres};
use utility::{id::HasId, let_also::LetAlso};

use super::{convert_error, distance::distance_expression};
use crate::data_model::{with_id, DatabaseRow, DistanceRow};

/// Builds the proximity query for a locator configuration: all configured
/// columns plus the computed distance, one row per identity, strict
/// less-than radius filter, ascending distance. The reference point and the
/// radius bind as `$1`..`$3`.
///
/// Postgres does not allow select aliases in HAVING, so the distance
/// expression is repeated there.
pub fn build_search_query<T: HasId<IdType = i64>>(locator: &Locator<T>) -> String {
    let columns = locator
        .columns
        .iter()
        .map(|column| format!("{}.{}", locator.table, column))
        .collect::<Vec<_>>()
        .join(", ");
    let formula = distance_expression(
        &locator.latitude_field,
        &locator.longitude_field,
        "$1",
        "$2",
    );
    format!(
        "SELECT {columns}, {formula} AS distance \
         FROM {table} \
         GROUP BY {table}.id \
         HAVING {formula} < $3 \
         ORDER BY distance ASC;",
        table = locator.table,
    )
}

pub async fn search_within<'c, E, R>(
    executor: E,
    locator: &Locator<R::Model>,
    latitude: f64,
    longitude: f64,
    radius_km: f64,
) -> Result<Vec<WithDistance<WithId<R::Model>>>>
where
    E: Executor<'c, Database = Postgres>,
    R: DatabaseRow + Send + Unpin,
    for<'r> R: FromRow<'r, PgRow>,
    R::Model: HasId<IdType = i64>,
{
    let query = build_search_query(locator);
    sqlx::query_as::<Postgres, DistanceRow<R>>(&query)
        .bind(latitude)
        .bind(longitude)
        .bind(radius_km)
        .fetch_all(executor)
        .await
        .map_err(convert_error)?
        .let_owned(|rows: Vec<DistanceRow<R>>| {
            Ok(rows
                .into_iter()
                .map(|row| WithDistance::new(row.distance_km, with_id(row.row)))
                .collect())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_query_selects_columns_and_distance() {
        let query = build_search_query(&Locator::locations());
        assert!(query.starts_with("SELECT locations.id, locations.name,"));
        assert!(query.contains("locations.latitude, locations.longitude"));
        assert!(query.contains(" AS distance"));
        assert!(query.contains("FROM locations"));
    }

    #[test]
    fn query_groups_by_identity_and_filters_post_aggregation() {
        let query = build_search_query(&Locator::locations());
        assert!(query.contains("GROUP BY locations.id"));
        assert!(query.contains("< $3 ORDER BY distance ASC;"));
        let having = query.split("HAVING").nth(1).expect("HAVING clause");
        assert!(having.contains("COS(RADIANS(locations.latitude))"));
    }

    #[test]
    fn venue_query_uses_the_variant_field_names() {
        let query = build_search_query(&Locator::venues());
        assert!(query.contains("FROM venues"));
        assert!(query.contains("GROUP BY venues.id"));
        assert!(query.contains("COS(RADIANS(venues.lat))"));
        assert!(query.contains("RADIANS(venues.lng) - RADIANS($2)"));
        assert!(!query.contains("locations"));
    }

    #[test]
    fn reference_point_and_radius_are_bind_parameters() {
        let query = build_search_query(&Locator::locations());
        for placeholder in ["$1", "$2", "$3"] {
            assert!(query.contains(placeholder), "missing {placeholder}");
        }
    }
}
