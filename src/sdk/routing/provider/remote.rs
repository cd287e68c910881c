use super::types::DirectionsResponse;
use crate::sdk::format::{format_point, format_waypoints};
use crate::sdk::geometry::{decode_polyline, Coordinate};
use crate::sdk::routing::error::{DirectionsStatus, RoutingError};
use crate::sdk::routing::route::{check_stops, RouteSummary};
use crate::sdk::routing::service::DirectionsProvider;
use crate::sdk::util::rate_limit::{wait_for, Limiter};
use reqwest::Url;
use reqwest::blocking::Client;
use std::time::Duration;

const DIRECTIONS_PATH: &str = "/maps/api/directions/json";
const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

pub struct RemoteDirectionsProvider {
    client: Client,
    api_key: String,
    base_url: String,
    limiter: Limiter,
}

impl RemoteDirectionsProvider {
    pub fn new(api_key: String, base_url: String, limiter: Limiter) -> Result<Self, RoutingError> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(15)).build()?,
            api_key,
            base_url,
            limiter,
        })
    }
}

/// Builds the directions request URL. Everything between the first and
/// last stop goes into the `waypoints` parameter.
pub fn build_directions_url(
    base_url: &str,
    api_key: &str,
    stops: &[Coordinate],
) -> Result<Url, RoutingError> {
    let (origin, destination) = match stops {
        [origin, .., destination] => (*origin, *destination),
        _ => return Err(RoutingError::NotEnoughPoints(stops.len())),
    };

    let mut params = vec![
        ("origin", format_point(origin)),
        ("destination", format_point(destination)),
        ("mode", "driving".to_string()),
    ];
    if let Some(waypoints) = format_waypoints(stops) {
        params.push(("waypoints", waypoints));
    }
    params.push(("key", api_key.to_string()));

    let endpoint = format!("{}{}", base_url.trim_end_matches('/'), DIRECTIONS_PATH);
    Url::parse_with_params(&endpoint, &params)
        .map_err(|e| RoutingError::Generic(format!("Invalid directions URL {}: {}", endpoint, e)))
}

/// Turns a successful HTTP body into a route: decodes the overview polyline
/// and sums distance and duration over every leg.
pub fn parse_directions_response(text: &str) -> Result<RouteSummary, RoutingError> {
    let response: DirectionsResponse = serde_json::from_str(text)?;

    match response.status.as_str() {
        STATUS_OK => {}
        STATUS_ZERO_RESULTS => return Err(RoutingError::NoRoute),
        _ => {
            return Err(RoutingError::ApiError {
                status: response.status,
                message: response.error_message.unwrap_or_default(),
            });
        }
    }

    let route = response.routes.first().ok_or(RoutingError::NoRoute)?;
    let path = decode_polyline(&route.overview_polyline.points)?;

    Ok(RouteSummary {
        path,
        distance_m: route.legs.iter().map(|leg| leg.distance.value).sum(),
        duration_s: route.legs.iter().map(|leg| leg.duration.value).sum(),
    })
}

impl DirectionsProvider for RemoteDirectionsProvider {
    fn directions(&self, stops: &[Coordinate]) -> Result<RouteSummary, RoutingError> {
        if let Some(summary) = check_stops(stops)? {
            return Ok(summary);
        }

        let url = build_directions_url(&self.base_url, &self.api_key, stops)?;
        wait_for(&self.limiter);
        log::debug!(
            "[PROVIDER] Calling remote directions for {} stops: {:?} -> {:?}",
            stops.len(),
            stops.first(),
            stops.last()
        );

        let response = match self.client.get(url.clone()).send() {
            Ok(resp) => resp,
            Err(e) => {
                // The URL carries the API key, so only the path is logged
                log::error!(
                    "Failed to send directions request. URL: {}\nError: {}",
                    url.path(),
                    e
                );
                return Err(RoutingError::RequestError(e));
            }
        };

        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            // Try to parse the structured error first
            if let Ok(payload) = serde_json::from_str::<DirectionsStatus>(&text) {
                return Err(RoutingError::ApiError {
                    status: payload.status,
                    message: payload.error_message.unwrap_or_default(),
                });
            } else {
                // Fallback to a raw error if parsing fails
                log::error!(
                    "API returned non-success status: {}. Unparseable Body: {}",
                    status,
                    text
                );
                return Err(RoutingError::RawApiError(text));
            }
        }

        parse_directions_response(&text).map_err(|e| {
            log::error!(
                "Failed to read DirectionsResponse. URL: {}\nError: {}. Body: {}",
                url.path(),
                e,
                text
            );
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::geometry::GeoError;

    fn stops() -> Vec<Coordinate> {
        vec![
            Coordinate::new(-12.0464, -77.0428),
            Coordinate::new(-12.0708, -77.0335),
            Coordinate::new(-12.1211, -77.0297),
        ]
    }

    fn query_value(url: &Url, name: &str) -> Option<String> {
        url.query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    #[test]
    fn test_build_url_with_waypoints() {
        let url = build_directions_url("https://maps.example.com/", "secret", &stops()).unwrap();

        assert_eq!(url.path(), "/maps/api/directions/json");
        assert_eq!(query_value(&url, "origin").as_deref(), Some("-12.0464,-77.0428"));
        assert_eq!(
            query_value(&url, "destination").as_deref(),
            Some("-12.1211,-77.0297")
        );
        assert_eq!(
            query_value(&url, "waypoints").as_deref(),
            Some("-12.0708,-77.0335")
        );
        assert_eq!(query_value(&url, "key").as_deref(), Some("secret"));
    }

    #[test]
    fn test_build_url_without_waypoints() {
        let url = build_directions_url("https://maps.example.com", "k", &stops()[..2]).unwrap();
        assert_eq!(query_value(&url, "waypoints"), None);
        assert!(matches!(
            build_directions_url("https://maps.example.com", "k", &stops()[..1]),
            Err(RoutingError::NotEnoughPoints(1))
        ));
    }

    #[test]
    fn test_parse_ok_response() {
        let body = r#"{
            "status": "OK",
            "routes": [{
                "overview_polyline": { "points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@" },
                "legs": [
                    { "distance": { "text": "1.2 km", "value": 1200 }, "duration": { "text": "4 min", "value": 240 } },
                    { "distance": { "text": "3.0 km", "value": 3050 }, "duration": { "text": "9 min", "value": 545 } }
                ]
            }]
        }"#;

        let summary = parse_directions_response(body).unwrap();
        assert_eq!(summary.path.len(), 3);
        assert_eq!(summary.distance_m, 4250.0);
        assert_eq!(summary.duration_s, 785);
        assert_eq!(summary.duration_text(), "13 min");
    }

    #[test]
    fn test_parse_status_errors() {
        assert!(matches!(
            parse_directions_response(r#"{ "status": "ZERO_RESULTS", "routes": [] }"#),
            Err(RoutingError::NoRoute)
        ));

        match parse_directions_response(
            r#"{ "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid." }"#,
        ) {
            Err(RoutingError::ApiError { status, message }) => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message, "The provided API key is invalid.");
            }
            other => panic!("unexpected result: {other:?}"),
        }

        assert!(matches!(
            parse_directions_response(r#"{ "status": "OK", "routes": [] }"#),
            Err(RoutingError::NoRoute)
        ));
    }

    #[test]
    fn test_parse_bad_polyline_and_bad_json() {
        let body = r#"{ "status": "OK", "routes": [{ "overview_polyline": { "points": "_p~iF" }, "legs": [] }] }"#;
        assert!(matches!(
            parse_directions_response(body),
            Err(RoutingError::Geometry(GeoError::TruncatedPolyline { .. }))
        ));
        assert!(matches!(
            parse_directions_response("<html>"),
            Err(RoutingError::ParseError(_))
        ));
    }
}
