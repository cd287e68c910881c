use std::{env, error::Error, num::NonZeroU32, path::PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";
pub const DEFAULT_REQUESTS_PER_MINUTE: u32 = 40;
pub const DEFAULT_CACHE_PATH: &str = "route_cache.json";

#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    pub api_key: String,
    pub base_url: String,
    pub requests_per_minute: NonZeroU32,
    pub cache_path: PathBuf,
}

impl DirectionsConfig {
    /// Reads `DIRECTIONS_API_KEY` (required), `DIRECTIONS_BASE_URL`,
    /// `DIRECTIONS_REQUESTS_PER_MINUTE` and `ROUTE_CACHE_PATH`.
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        let api_key = env::var("DIRECTIONS_API_KEY")
            .map_err(|_| "DIRECTIONS_API_KEY is not set")?;
        Self::from_parts(
            api_key,
            env::var("DIRECTIONS_BASE_URL").ok(),
            env::var("DIRECTIONS_REQUESTS_PER_MINUTE").ok(),
            env::var("ROUTE_CACHE_PATH").ok(),
        )
    }

    fn from_parts(
        api_key: String,
        base_url: Option<String>,
        requests_per_minute: Option<String>,
        cache_path: Option<String>,
    ) -> Result<Self, Box<dyn Error>> {
        let requests_per_minute = match requests_per_minute {
            Some(raw) => raw
                .trim()
                .parse::<NonZeroU32>()
                .map_err(|e| format!("Invalid DIRECTIONS_REQUESTS_PER_MINUTE \"{}\": {}", raw, e))?,
            None => NonZeroU32::new(DEFAULT_REQUESTS_PER_MINUTE).ok_or("zero default quota")?,
        };

        Ok(Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            requests_per_minute,
            cache_path: PathBuf::from(cache_path.unwrap_or_else(|| DEFAULT_CACHE_PATH.to_string())),
        })
    }
}
