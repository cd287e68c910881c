use super::error::GeoError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A latitude/longitude pair in degrees.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a coordinate, rejecting latitudes outside [-90, 90] and
    /// longitudes outside [-180, 180].
    pub fn try_new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        let coord = Self::new(lat, lon);
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(GeoError::CoordinateOutOfRange { lat, lon })
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

impl FromStr for Coordinate {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GeoError::InvalidCoordinateText(s.to_string());
        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let lat = lat.trim().parse::<f64>().map_err(|_| invalid())?;
        let lon = lon.trim().parse::<f64>().map_err(|_| invalid())?;
        Self::try_new(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(Coordinate::try_new(-12.05, -77.04).is_ok());
        assert_eq!(
            Coordinate::try_new(91.0, 0.0),
            Err(GeoError::CoordinateOutOfRange { lat: 91.0, lon: 0.0 })
        );
        assert!(Coordinate::try_new(0.0, -180.5).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let coord: Coordinate = " -12.0464, -77.0428 ".parse().unwrap();
        assert_eq!(coord, Coordinate::new(-12.0464, -77.0428));
        assert_eq!(coord.to_string(), "-12.0464,-77.0428");
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            "-12.0464".parse::<Coordinate>(),
            Err(GeoError::InvalidCoordinateText(_))
        ));
        assert!(matches!(
            "abc,1.0".parse::<Coordinate>(),
            Err(GeoError::InvalidCoordinateText(_))
        ));
        assert!(matches!(
            "100,1.0".parse::<Coordinate>(),
            Err(GeoError::CoordinateOutOfRange { .. })
        ));
    }
}
