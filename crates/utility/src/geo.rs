pub const EARTH_RADIUS_KM: f64 = 6371.0;

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Great-circle distance in kilometers between two coordinates given in
/// degrees, using the spherical law of cosines.
///
/// The acos argument is clamped to [-1, 1]: floating-point error can push it
/// slightly out of the domain for identical or antipodal points, which would
/// otherwise yield NaN.
pub fn spherical_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lat2_rad = to_radians(latitude_2);

    let cos_angle = lat1_rad.cos()
        * lat2_rad.cos()
        * (to_radians(longitude_2) - to_radians(longitude_1)).cos()
        + lat1_rad.sin() * lat2_rad.sin();

    EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON_KM: f64 = 1e-6;

    #[test]
    fn distance_to_self_is_zero() {
        let points = [
            (0.0, 0.0),
            (-37.8136, 144.9631),
            (89.9, -12.0),
            (-89.9, 179.9),
        ];
        for (lat, lon) in points {
            let distance = spherical_distance(lat, lon, lat, lon);
            assert!(
                distance.abs() < EPSILON_KM,
                "expected zero distance at ({lat}, {lon}), got {distance}"
            );
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = (-37.8136, 144.9631); // Melbourne
        let b = (-33.8688, 151.2093); // Sydney
        let ab = spherical_distance(a.0, a.1, b.0, b.1);
        let ba = spherical_distance(b.0, b.1, a.0, a.1);
        assert!((ab - ba).abs() < EPSILON_KM);
    }

    #[test]
    fn melbourne_to_sydney_is_about_714_km() {
        let distance =
            spherical_distance(-37.8136, 144.9631, -33.8688, 151.2093);
        assert!(
            (distance - 714.0).abs() < 5.0,
            "unexpected distance: {distance}"
        );
    }

    #[test]
    fn triangle_inequality_holds_approximately() {
        let a = (-37.8136, 144.9631);
        let b = (-33.8688, 151.2093);
        let c = (-27.4698, 153.0251);
        let ab = spherical_distance(a.0, a.1, b.0, b.1);
        let bc = spherical_distance(b.0, b.1, c.0, c.1);
        let ac = spherical_distance(a.0, a.1, c.0, c.1);
        assert!(ac <= ab + bc + EPSILON_KM);
    }

    #[test]
    fn antipodal_points_do_not_produce_nan() {
        let distance = spherical_distance(0.0, 0.0, 0.0, 180.0);
        assert!(distance.is_finite());
        // half the circumference of the 6371 km sphere
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1.0);
    }

    #[test]
    fn near_identical_points_do_not_produce_nan() {
        let distance = spherical_distance(
            -37.8136,
            144.9631,
            -37.8136 + 1e-13,
            144.9631 - 1e-13,
        );
        assert!(distance.is_finite());
        assert!(distance < 0.001);
    }
}
