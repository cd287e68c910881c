pub mod duration;
pub mod waypoints;

pub use duration::format_duration;
pub use waypoints::{format_point, format_waypoints};
