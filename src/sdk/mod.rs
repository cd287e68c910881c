pub mod config;
pub mod format;
pub mod geometry;
pub mod routing;
pub mod util;
