use super::cache::{RouteCache, RouteKey};
use super::error::RoutingError;
use super::service::DirectionsProvider;
use crate::sdk::format::format_duration;
use crate::sdk::geometry::{is_point_near_polyline, Coordinate};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub path: Vec<Coordinate>,
    pub distance_m: f64,
    pub duration_s: u64,
}

impl RouteSummary {
    /// A route that goes nowhere, for stops that are all the same point.
    pub fn stationary(at: Coordinate) -> Self {
        Self {
            path: vec![at],
            distance_m: 0.0,
            duration_s: 0,
        }
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }

    pub fn duration_text(&self) -> String {
        format_duration(self.duration_s)
    }

    /// Whether a vehicle at `position` is still following this route.
    pub fn is_on_route(&self, position: Coordinate, tolerance_m: f64) -> bool {
        is_point_near_polyline(position, &self.path, tolerance_m)
    }
}

/// Checks the stop list before any request is made. Returns a ready answer
/// when every stop is the same point.
pub(crate) fn check_stops(stops: &[Coordinate]) -> Result<Option<RouteSummary>, RoutingError> {
    match stops {
        [] | [_] => Err(RoutingError::NotEnoughPoints(stops.len())),
        [first, rest @ ..] if rest.iter().all(|stop| stop == first) => {
            log::debug!("All stops are identical. Returning zero route.");
            Ok(Some(RouteSummary::stationary(*first)))
        }
        _ => Ok(None),
    }
}

/// Returns the cached route for `stops`, fetching and caching it on a miss.
pub fn cached_directions(
    provider: &dyn DirectionsProvider,
    cache: &mut RouteCache,
    stops: &[Coordinate],
) -> Result<RouteSummary, RoutingError> {
    let key = RouteKey::new(stops);

    if let Some(summary) = cache.get(&key) {
        log::debug!("[CACHE HIT] {}", key);
        return Ok(summary.clone());
    }

    log::debug!("[CACHE MISS] {}", key);
    let summary = provider.directions(stops)?;
    cache.insert(key, summary.clone());
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl DirectionsProvider for CountingProvider {
        fn directions(&self, stops: &[Coordinate]) -> Result<RouteSummary, RoutingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(RouteSummary {
                path: stops.to_vec(),
                distance_m: 1500.0,
                duration_s: 300,
            })
        }
    }

    #[test]
    fn test_check_stops() {
        let a = Coordinate::new(-12.0464, -77.0428);
        let b = Coordinate::new(-12.1211, -77.0297);

        assert!(matches!(check_stops(&[]), Err(RoutingError::NotEnoughPoints(0))));
        assert!(matches!(check_stops(&[a]), Err(RoutingError::NotEnoughPoints(1))));
        assert_eq!(
            check_stops(&[a, a, a]).unwrap(),
            Some(RouteSummary::stationary(a))
        );
        assert_eq!(check_stops(&[a, b]).unwrap(), None);
    }

    #[test]
    fn test_cached_directions_hits_provider_once() {
        let provider = CountingProvider {
            calls: AtomicUsize::new(0),
        };
        let mut cache = RouteCache::default();
        let stops = [Coordinate::new(-12.0464, -77.0428), Coordinate::new(-12.1211, -77.0297)];

        let first = cached_directions(&provider, &mut cache, &stops).unwrap();
        let second = cached_directions(&provider, &mut cache, &stops).unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_summary_display_helpers() {
        let summary = RouteSummary {
            path: vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.01)],
            distance_m: 12_345.0,
            duration_s: 3725,
        };
        assert_eq!(summary.distance_km(), 12.345);
        assert_eq!(summary.duration_text(), "1 h 2 min");
        assert!(summary.is_on_route(Coordinate::new(0.0, 0.005), 10.0));
        assert!(!summary.is_on_route(Coordinate::new(0.01, 0.005), 10.0));
    }
}
