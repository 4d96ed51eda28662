//! Startup configuration read from environment variables.

use log::warn;
use std::env;
use std::path::PathBuf;

/// Default window scale factor.
const DEFAULT_SCALE: f64 = 1.0;

#[derive(Debug, PartialEq)]
pub(crate) struct Config {
    /// Draw hit boxes over the board (`DEBUG=true`).
    pub(crate) debug: bool,
    /// Directory with PCX sprite overrides (`CROSSING_ASSETS`).
    pub(crate) assets: Option<PathBuf>,
    /// Window size multiplier (`CROSSING_SCALE`).
    pub(crate) scale: f64,
}

impl Config {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a `Config` from any key/value source.
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Enable debug mode with `DEBUG=true` environment variable
        let debug = lookup("DEBUG")
            .unwrap_or_else(|| "false".to_string())
            .parse()
            .unwrap_or(false);

        let assets = lookup("CROSSING_ASSETS")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        let scale = match lookup("CROSSING_SCALE") {
            None => DEFAULT_SCALE,
            Some(value) => match value.trim().parse::<f64>() {
                Ok(scale) if scale.is_finite() && scale > 0.0 => scale,
                _ => {
                    warn!("Ignoring invalid CROSSING_SCALE {:?}", value);
                    DEFAULT_SCALE
                }
            },
        };

        Self {
            debug,
            assets,
            scale,
        }
    }
}
