use super::coordinate::Coordinate;

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two coordinates (haversine).
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h just past 1 for antipodal points
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Sum of the haversine distances between consecutive points.
pub fn path_length(path: &[Coordinate]) -> f64 {
    path.windows(2)
        .map(|pair| haversine_distance(pair[0], pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const PLAZA_DE_ARMAS: Coordinate = Coordinate::new(-12.0464, -77.0428);
    const MIRAFLORES: Coordinate = Coordinate::new(-12.1211, -77.0297);

    #[test]
    fn test_identical_points_are_zero() {
        assert_eq!(haversine_distance(PLAZA_DE_ARMAS, PLAZA_DE_ARMAS), 0.0);
        assert_eq!(haversine_distance(MIRAFLORES, MIRAFLORES), 0.0);
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(
            haversine_distance(PLAZA_DE_ARMAS, MIRAFLORES),
            haversine_distance(MIRAFLORES, PLAZA_DE_ARMAS)
        );
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = haversine_distance(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert_relative_eq!(d, EARTH_RADIUS_M * 1f64.to_radians(), max_relative = 1e-9);
    }

    #[test]
    fn test_known_city_distance() {
        // Plaza de Armas to Miraflores is roughly 8.4 km as the crow flies
        let d = haversine_distance(PLAZA_DE_ARMAS, MIRAFLORES);
        assert!((8_000.0..9_000.0).contains(&d), "got {d}");
    }

    #[test]
    fn test_antipodal_points() {
        let a = Coordinate::new(-29.877, -125.99);
        let b = Coordinate::new(29.877, 54.01);
        let d = haversine_distance(a, b);
        assert!(!d.is_nan());
        assert_relative_eq!(d, std::f64::consts::PI * EARTH_RADIUS_M, max_relative = 1e-6);
        assert_relative_eq!(
            haversine_distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0)),
            std::f64::consts::PI * EARTH_RADIUS_M,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_path_length() {
        assert_eq!(path_length(&[]), 0.0);
        assert_eq!(path_length(&[MIRAFLORES]), 0.0);

        let via = Coordinate::new(-12.09, -77.03);
        let total = path_length(&[PLAZA_DE_ARMAS, via, MIRAFLORES]);
        assert_abs_diff_eq!(
            total,
            haversine_distance(PLAZA_DE_ARMAS, via) + haversine_distance(via, MIRAFLORES),
            epsilon = 1e-9
        );
    }
}
