pub mod remote;
pub mod types;

pub use remote::{build_directions_url, parse_directions_response, RemoteDirectionsProvider};
