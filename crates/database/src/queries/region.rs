use geosearch::database::{PostcodeResolution, Result};
use model::region::{parse_postcode_list, Region};
use sqlx::PgPool;
use utility::id::Id;

use super::{convert_error, location};

/// Replaces the region's full association set with the locations resolvable
/// from the postcode list. Runs as sequential autocommit statements, so a
/// concurrent writer can interleave; acceptable under the single-writer
/// assumption. Unresolvable tokens never abort the write.
pub async fn replace_locations(
    pool: &PgPool,
    region_id: Id<Region>,
    postcode_list: &str,
) -> Result<PostcodeResolution> {
    let mut linked = Vec::new();
    let mut unresolved = Vec::new();
    for token in parse_postcode_list(postcode_list) {
        match location::first_by_postcode(pool, token).await? {
            Some(location) => linked.push(location.id),
            None => unresolved.push(token.to_owned()),
        }
    }

    sqlx::query("DELETE FROM region_locations WHERE region_id = $1;")
        .bind(region_id.raw())
        .execute(pool)
        .await
        .map_err(convert_error)?;

    for location_id in &linked {
        sqlx::query(
            "
            INSERT INTO region_locations (region_id, location_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING;
            ",
        )
        .bind(region_id.raw())
        .bind(location_id.raw())
        .execute(pool)
        .await
        .map_err(convert_error)?;
    }

    if !unresolved.is_empty() {
        log::warn!(
            "region {} postcode update skipped unresolved tokens: {:?}",
            region_id,
            unresolved
        );
    }

    Ok(PostcodeResolution { linked, unresolved })
}
