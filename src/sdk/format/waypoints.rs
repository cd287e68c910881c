use crate::sdk::geometry::Coordinate;

const WAYPOINT_SEPARATOR: &str = "|";

/// Formats a point the way the directions API expects it: "lat,lon".
pub fn format_point(point: Coordinate) -> String {
    format!("{},{}", point.lat, point.lon)
}

/// Formats the intermediate stops of a route (first and last excluded),
/// joined by `|`. Returns `None` when there are no intermediate stops.
pub fn format_waypoints(points: &[Coordinate]) -> Option<String> {
    if points.len() < 3 {
        return None;
    }

    let intermediates: Vec<String> = points[1..points.len() - 1]
        .iter()
        .copied()
        .map(format_point)
        .collect();
    Some(intermediates.join(WAYPOINT_SEPARATOR))
}
