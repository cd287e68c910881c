use crate::sdk::geometry::GeoError;
use serde::Deserialize;
use thiserror::Error;

// Status envelope every directions response carries, success or not
#[derive(Deserialize, Debug)]
pub struct DirectionsStatus {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("No route found between the requested stops")]
    NoRoute,

    // The API answered with a structured, non-OK status
    #[error("API Error ({status}): {message}")]
    ApiError { status: String, message: String },

    // A fallback for HTTP failures whose body isn't the expected JSON
    #[error("Unstructured API Error: {0}")]
    RawApiError(String),

    #[error("A route needs at least 2 stops, got {0}")]
    NotEnoughPoints(usize),

    #[error("Underlying request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid route geometry: {0}")]
    Geometry(#[from] GeoError),

    #[error("Generic error: {0}")]
    Generic(String),
}
