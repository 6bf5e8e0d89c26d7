use utility::geo::EARTH_RADIUS_KM;

/// Renders the spherical law-of-cosines distance expression for use inside a
/// filter or sort clause. Evaluates to kilometers.
///
/// `latitude_field` and `longitude_field` are column names from a locator
/// configuration, optionally table-qualified; they are never user input. The
/// reference coordinates enter the query exclusively through the given bind
/// placeholders (`lat_param` first, then `lon_param`).
///
/// The acos argument is clamped to [-1, 1]; floating-point overshoot at
/// identical or antipodal points would otherwise surface as NaN rows.
pub fn distance_expression(
    latitude_field: &str,
    longitude_field: &str,
    lat_param: &str,
    lon_param: &str,
) -> String {
    format!(
        "{radius} * ACOS(LEAST(1.0, GREATEST(-1.0, \
         COS(RADIANS({lat_param})) * COS(RADIANS({lat_field})) * \
         COS(RADIANS({lon_field}) - RADIANS({lon_param})) + \
         SIN(RADIANS({lat_param})) * SIN(RADIANS({lat_field})))))",
        radius = EARTH_RADIUS_KM,
        lat_field = latitude_field,
        lon_field = longitude_field,
    )
}
