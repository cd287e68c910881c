pub mod coordinate;
pub mod distance;
pub mod error;
pub mod polyline;
pub mod proximity;

pub use coordinate::Coordinate;
pub use distance::{haversine_distance, path_length, EARTH_RADIUS_M};
pub use error::GeoError;
pub use polyline::{decode_polyline, encode_polyline, Polyline};
pub use proximity::{
    distance_to_polyline, distance_to_segment, is_point_near_polyline, is_point_near_route,
    SegmentMatch, DEFAULT_TOLERANCE_METERS,
};
