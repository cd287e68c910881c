use serde::Deserialize;

// --- Data Structures for parsing directions responses ---

#[derive(Deserialize, Debug)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
}
#[derive(Deserialize, Debug)]
pub struct Route {
    pub overview_polyline: OverviewPolyline,
    #[serde(default)]
    pub legs: Vec<Leg>,
}
#[derive(Deserialize, Debug)]
pub struct OverviewPolyline {
    pub points: String,
}
#[derive(Deserialize, Debug)]
pub struct Leg {
    pub distance: LegDistance,
    pub duration: LegDuration,
}
/// Meters.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct LegDistance {
    pub value: f64,
}
/// Seconds.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct LegDuration {
    pub value: u64,
}
