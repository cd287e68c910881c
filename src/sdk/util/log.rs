use env_logger::{Builder, Env};

const DEFAULT_FILTER: &str = "info";

/// Sets up `env_logger`. `RUST_LOG` overrides the default `info` filter;
/// reqwest's connection chatter stays at `warn` unless asked for.
pub fn init_logging() {
    let result = Builder::new()
        .parse_filters(DEFAULT_FILTER)
        .filter_module("reqwest", log::LevelFilter::Warn)
        .parse_env(Env::default())
        .format_timestamp_secs()
        .format_module_path(false)
        .try_init();

    if let Err(e) = result {
        log::warn!("Logger already initialized: {}", e);
    }
}
