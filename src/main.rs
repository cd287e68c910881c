use clap::{Parser, Subcommand};
use std::{error::Error, path::PathBuf};
use vaseguro_route::sdk::{
    config::DirectionsConfig,
    format::{format_duration, format_waypoints},
    geometry::{
        decode_polyline, distance_to_polyline, encode_polyline, haversine_distance,
        is_point_near_polyline, Coordinate, DEFAULT_TOLERANCE_METERS,
    },
    routing::{RemoteDirectionsProvider, RouteCache, cached_directions},
    util::{log::init_logging, rate_limit::directions_limiter},
};

/// Route geometry tools for the VaSeguro transport tracker
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode an encoded polyline and print its points as JSON
    Decode { encoded: String },

    /// Encode "lat,lon" points into a polyline
    Encode {
        #[arg(required = true, allow_hyphen_values = true)]
        points: Vec<Coordinate>,
    },

    /// Great-circle distance in meters between two "lat,lon" points
    Distance {
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Check whether a point is within tolerance of an encoded route
    Near {
        #[arg(long)]
        polyline: String,

        #[arg(long, allow_hyphen_values = true)]
        point: Coordinate,

        /// Tolerance in meters
        #[arg(long, default_value_t = DEFAULT_TOLERANCE_METERS)]
        tolerance: f64,
    },

    /// Format a number of seconds for display
    Duration { seconds: u64 },

    /// Fetch a driving route through the given "lat,lon" stops
    Route {
        #[arg(required = true, num_args = 2.., allow_hyphen_values = true)]
        stops: Vec<Coordinate>,

        /// [Optional] Route cache file, overrides ROUTE_CACHE_PATH
        #[arg(long)]
        cache: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Decode { encoded } => {
            let points = decode_polyline(&encoded)?;
            log::info!("Decoded {} points", points.len());
            println!("{}", serde_json::to_string_pretty(&points)?);
        }
        Command::Encode { points } => {
            println!("{}", encode_polyline(&points)?);
        }
        Command::Distance { from, to } => {
            println!("{:.1}", haversine_distance(from, to));
        }
        Command::Near {
            polyline,
            point,
            tolerance,
        } => {
            let path = decode_polyline(&polyline)?;
            let near = is_point_near_polyline(point, &path, tolerance);
            match distance_to_polyline(point, &path) {
                Some(closest) => log::info!(
                    "Closest segment #{} at {:.1} m (tolerance {} m)",
                    closest.segment,
                    closest.distance_m,
                    tolerance
                ),
                None => log::warn!("Route has no segments"),
            }
            println!("{}", near);
        }
        Command::Duration { seconds } => {
            println!("{}", format_duration(seconds));
        }
        Command::Route { stops, cache } => {
            let config = DirectionsConfig::from_env()?;
            let cache_path = cache.unwrap_or_else(|| config.cache_path.clone());
            let provider = RemoteDirectionsProvider::new(
                config.api_key,
                config.base_url,
                directions_limiter(config.requests_per_minute),
            )?;

            let mut route_cache = RouteCache::load_from_file(&cache_path)?;
            let summary = cached_directions(&provider, &mut route_cache, &stops)?;

            log::info!(
                "Route through {} stops: {:.2} km, {}",
                stops.len(),
                summary.distance_km(),
                summary.duration_text()
            );
            if let Some(waypoints) = format_waypoints(&stops) {
                log::info!("Waypoints: {}", waypoints);
            }
            println!("{}", encode_polyline(&summary.path)?);

            route_cache.save_to_file(&cache_path)?;
            log::info!("💾 Cache saved to {}", cache_path.display());
        }
    }

    Ok(())
}
