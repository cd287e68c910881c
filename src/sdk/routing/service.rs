use super::error::RoutingError;
use super::route::RouteSummary;
use crate::sdk::geometry::Coordinate;

pub trait DirectionsProvider: Send + Sync {
    /// Gets a driving route visiting `stops` in order.
    ///
    /// The first stop is the origin, the last the destination, and anything
    /// in between is sent as a waypoint.
    fn directions(&self, stops: &[Coordinate]) -> Result<RouteSummary, RoutingError>;
}
