use geosearch::database::Result;
use model::{location::Location, WithId};
use sqlx::{Executor, Postgres};
use utility::let_also::LetAlso;

use super::convert_error;
use crate::data_model::{location::LocationRow, with_id, with_ids};

pub async fn by_postcode<'c, E>(
    executor: E,
    postcode: &str,
) -> Result<Vec<WithId<Location>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id, name, state, location_type, postcode, latitude, longitude
        FROM
            locations
        WHERE postcode = $1
        ORDER BY id;
        ",
    )
    .bind(postcode)
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|locations: Vec<LocationRow>| Ok(with_ids(locations)))
}

pub async fn first_by_postcode<'c, E>(
    executor: E,
    postcode: &str,
) -> Result<Option<WithId<Location>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id, name, state, location_type, postcode, latitude, longitude
        FROM
            locations
        WHERE postcode = $1
        ORDER BY id
        LIMIT 1;
        ",
    )
    .bind(postcode)
    .fetch_optional(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|location: Option<LocationRow>| Ok(location.map(with_id)))
}

/// Case-insensitive substring match across postcode, state and name.
/// `LIMIT NULL` applies no cap.
pub async fn by_keyword<'c, E>(
    executor: E,
    keyword: &str,
    limit: Option<i64>,
) -> Result<Vec<WithId<Location>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id, name, state, location_type, postcode, latitude, longitude
        FROM
            locations
        WHERE
            postcode ILIKE $1 OR state ILIKE $1 OR name ILIKE $1
        ORDER BY id
        LIMIT $2;
        ",
    )
    .bind(keyword_pattern(keyword))
    .bind(limit)
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|locations: Vec<LocationRow>| Ok(with_ids(locations)))
}

/// Wraps the keyword in `%` wildcards. Wildcard characters inside the user
/// input are stripped so they cannot widen the match.
pub fn keyword_pattern(keyword: &str) -> String {
    format!("%{}%", keyword.replace(['%', '_'], ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_wraps_keyword_in_wildcards() {
        assert_eq!(keyword_pattern("Melb"), "%Melb%");
    }

    #[test]
    fn pattern_neutralizes_user_supplied_wildcards() {
        assert_eq!(keyword_pattern("%_Melb_%"), "%Melb%");
    }

    #[test]
    fn pattern_of_empty_keyword_matches_everything() {
        assert_eq!(keyword_pattern(""), "%%");
    }
}
