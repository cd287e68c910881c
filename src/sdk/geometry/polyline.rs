//! Google encoded polyline format.
//!
//! Each value is scaled by 1e5, delta-encoded against the previous point,
//! zigzag-encoded, then written as 5-bit chunks offset by 63 with bit 0x20
//! marking continuation. Latitude and longitude alternate.
//!
//! Encoding goes through the `polyline` crate. Decoding is done here so a
//! bad input reports the offending byte and why it was rejected.

use super::coordinate::Coordinate;
use super::distance::path_length;
use super::error::GeoError;
use super::proximity::is_point_near_polyline;
use geo_types::Coord;
use serde::{Deserialize, Serialize};

const PRECISION: f64 = 1e5;
const PRECISION_DIGITS: u32 = 5;
const CHUNK_OFFSET: u8 = 63;
const CONTINUATION_BIT: i64 = 0x20;
const CHUNK_MASK: i64 = 0x1f;
// 7 chunks carry 35 bits, far beyond any delta between valid coordinates.
const MAX_SHIFT: u32 = 30;

/// Decodes an encoded polyline into its points.
///
/// An empty string decodes to an empty path. Bytes outside the encoding
/// alphabet, inputs that stop mid-point and points outside the valid
/// latitude/longitude range are reported as errors.
pub fn decode_polyline(encoded: &str) -> Result<Vec<Coordinate>, GeoError> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;
    let mut points = Vec::new();

    while index < bytes.len() {
        let point_start = index;
        lat = lat
            .checked_add(next_value(bytes, &mut index)?)
            .ok_or(GeoError::PolylineOverflow { index: point_start })?;

        if index >= bytes.len() {
            return Err(GeoError::TruncatedPolyline { index });
        }

        let start = index;
        lon = lon
            .checked_add(next_value(bytes, &mut index)?)
            .ok_or(GeoError::PolylineOverflow { index: start })?;

        let (lat_deg, lon_deg) = (lat as f64 / PRECISION, lon as f64 / PRECISION);
        let point = Coordinate::try_new(lat_deg, lon_deg).map_err(|_| {
            GeoError::DecodedPointOutOfRange {
                index: point_start,
                lat: lat_deg,
                lon: lon_deg,
            }
        })?;
        points.push(point);
    }

    Ok(points)
}

fn next_value(bytes: &[u8], index: &mut usize) -> Result<i64, GeoError> {
    let start = *index;
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = *bytes
            .get(*index)
            .ok_or(GeoError::TruncatedPolyline { index: *index })?;
        if !(CHUNK_OFFSET..=CHUNK_OFFSET + 63).contains(&byte) {
            return Err(GeoError::InvalidPolylineByte {
                index: *index,
                byte,
            });
        }
        if shift > MAX_SHIFT {
            return Err(GeoError::PolylineOverflow { index: start });
        }

        let chunk = i64::from(byte - CHUNK_OFFSET);
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        *index += 1;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    Ok(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

/// Encodes points into the compact polyline format, rounding to 1e-5 degrees.
///
/// Every point must be a valid coordinate.
pub fn encode_polyline(points: &[Coordinate]) -> Result<String, GeoError> {
    if let Some(bad) = points.iter().find(|point| !point.is_valid()) {
        return Err(GeoError::CoordinateOutOfRange {
            lat: bad.lat,
            lon: bad.lon,
        });
    }

    let coords = points.iter().map(|point| Coord {
        x: point.lon,
        y: point.lat,
    });
    polyline::encode_coordinates(coords, PRECISION_DIGITS)
        .map_err(|e| GeoError::PolylineEncode(format!("{:?}", e)))
}

/// A route geometry held as decoded points.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    pub fn decode(encoded: &str) -> Result<Self, GeoError> {
        decode_polyline(encoded).map(Self::new)
    }

    pub fn encode(&self) -> Result<String, GeoError> {
        encode_polyline(&self.points)
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total length along the path in meters.
    pub fn length_meters(&self) -> f64 {
        path_length(&self.points)
    }

    pub fn is_near(&self, point: Coordinate, tolerance_m: f64) -> bool {
        is_point_near_polyline(point, &self.points, tolerance_m)
    }
}
