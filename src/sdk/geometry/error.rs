use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("Invalid polyline byte 0x{byte:02x} at index {index}")]
    InvalidPolylineByte { index: usize, byte: u8 },

    // Input ended in the middle of a value, or after a latitude with no longitude
    #[error("Polyline truncated at index {index}")]
    TruncatedPolyline { index: usize },

    #[error("Polyline value starting at index {index} overflows")]
    PolylineOverflow { index: usize },

    #[error("Decoded point at index {index} out of range: lat={lat}, lon={lon}")]
    DecodedPointOutOfRange { index: usize, lat: f64, lon: f64 },

    #[error("Failed to encode polyline: {0}")]
    PolylineEncode(String),

    #[error("Coordinate out of range: lat={lat}, lon={lon}")]
    CoordinateOutOfRange { lat: f64, lon: f64 },

    #[error("Cannot parse coordinate from \"{0}\", expected \"lat,lon\"")]
    InvalidCoordinateText(String),
}
