use super::coordinate::Coordinate;
use super::distance::haversine_distance;

pub const DEFAULT_TOLERANCE_METERS: f64 = 50.0;

/// Closest approach of a point to a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentMatch {
    /// Index of the segment's first point in the path.
    pub segment: usize,
    pub distance_m: f64,
}

/// Distance in meters from `point` to the segment `start -> end`.
///
/// The projection is done in degree space with `t` clamped to [0, 1], and
/// the distance to the projected point is measured with haversine.
pub fn distance_to_segment(point: Coordinate, start: Coordinate, end: Coordinate) -> f64 {
    let d_lat = end.lat - start.lat;
    let d_lon = end.lon - start.lon;
    let len_sq = d_lat * d_lat + d_lon * d_lon;

    if len_sq == 0.0 {
        return haversine_distance(point, start);
    }

    let t = ((point.lat - start.lat) * d_lat + (point.lon - start.lon) * d_lon) / len_sq;
    let t = t.clamp(0.0, 1.0);
    let projected = Coordinate::new(start.lat + t * d_lat, start.lon + t * d_lon);
    haversine_distance(point, projected)
}

/// Returns true as soon as any segment of `path` lies within `tolerance_m`
/// of `point`. Paths with fewer than two points have no segments.
pub fn is_point_near_polyline(point: Coordinate, path: &[Coordinate], tolerance_m: f64) -> bool {
    path.windows(2)
        .any(|pair| distance_to_segment(point, pair[0], pair[1]) <= tolerance_m)
}

/// [`is_point_near_polyline`] with [`DEFAULT_TOLERANCE_METERS`].
pub fn is_point_near_route(point: Coordinate, path: &[Coordinate]) -> bool {
    is_point_near_polyline(point, path, DEFAULT_TOLERANCE_METERS)
}

/// Finds the segment closest to `point`, or `None` if the path has no segments.
pub fn distance_to_polyline(point: Coordinate, path: &[Coordinate]) -> Option<SegmentMatch> {
    path.windows(2)
        .enumerate()
        .map(|(segment, pair)| SegmentMatch {
            segment,
            distance_m: distance_to_segment(point, pair[0], pair[1]),
        })
        .min_by(|a, b| a.distance_m.total_cmp(&b.distance_m))
}
