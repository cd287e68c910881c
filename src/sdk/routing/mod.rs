pub mod cache;
pub mod error;
pub mod provider;
pub mod route;
pub mod service;

pub use cache::{RouteCache, RouteKey};
pub use error::RoutingError;
pub use provider::RemoteDirectionsProvider;
pub use route::{cached_directions, RouteSummary};
pub use service::DirectionsProvider;
