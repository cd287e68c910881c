use super::route::RouteSummary;
use crate::sdk::format::format_point;
use crate::sdk::geometry::Coordinate;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, fs, io::Result as IoResult, path::Path, str::FromStr};

const STOP_SEPARATOR: &str = ";";

/// Identifies a route by its ordered stops.
#[derive(Serialize, Deserialize, Eq, PartialEq, Hash, Clone, Debug)]
pub struct RouteKey {
    pub stops: Vec<String>,
}

impl RouteKey {
    /// Stops are rendered as "lat,lon" text so that keys hash exactly.
    pub fn new(stops: &[Coordinate]) -> Self {
        Self {
            stops: stops.iter().copied().map(format_point).collect(),
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stops.join(STOP_SEPARATOR))
    }
}

impl FromStr for RouteKey {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stops: Vec<String> = s.split(STOP_SEPARATOR).map(str::to_string).collect();
        // Only the shape is checked: any key `new` builds must load back
        if stops.len() >= 2 && stops.iter().all(|stop| is_lat_lon_pair(stop)) {
            Ok(RouteKey { stops })
        } else {
            Err("Invalid RouteKey format")
        }
    }
}

fn is_lat_lon_pair(stop: &str) -> bool {
    stop.split_once(',')
        .is_some_and(|(lat, lon)| lat.parse::<f64>().is_ok() && lon.parse::<f64>().is_ok())
}

// --- Serde Helper for Complex Key ---
mod route_key_map {
    use super::{RouteKey, RouteSummary};
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};
    use std::{collections::HashMap, str::FromStr};

    pub fn serialize<S: Serializer>(
        map: &HashMap<RouteKey, RouteSummary>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let string_map: HashMap<String, &RouteSummary> =
            map.iter().map(|(k, v)| (k.to_string(), v)).collect();
        string_map.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<HashMap<RouteKey, RouteSummary>, D::Error> {
        let string_map = HashMap::<String, RouteSummary>::deserialize(deserializer)?;
        string_map
            .into_iter()
            .map(|(k, v)| Ok((RouteKey::from_str(&k).map_err(Error::custom)?, v)))
            .collect()
    }
}

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct RouteCache {
    #[serde(with = "route_key_map")]
    routes: HashMap<RouteKey, RouteSummary>,
}

impl RouteCache {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        if path.as_ref().exists() {
            let data = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> IoResult<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)
    }

    pub fn get(&self, key: &RouteKey) -> Option<&RouteSummary> {
        self.routes.get(key)
    }

    pub fn insert(&mut self, key: RouteKey, summary: RouteSummary) {
        self.routes.insert(key, summary);
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
