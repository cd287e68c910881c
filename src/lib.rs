pub mod sdk;

pub use sdk::config::DirectionsConfig;
pub use sdk::format::{format_duration, format_waypoints};
pub use sdk::geometry::{
    decode_polyline, encode_polyline, haversine_distance, is_point_near_polyline, Coordinate,
    GeoError, Polyline,
};
pub use sdk::routing::{cached_directions, DirectionsProvider, RouteCache, RouteSummary};
