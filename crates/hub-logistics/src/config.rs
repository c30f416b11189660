//! Runtime configuration and seed data.
//!
//! | variable | default | meaning |
//! |---|---|---|
//! | `HUB_PORT` | `3000` | HTTP listen port |
//! | `HUB_SETTLE_INTERVAL_MS` | `1000` | settlement poller period, must be > 0 |
//! | `HUB_SEED_PATH` | unset | JSON seed file; the demo seed is used when unset |

use crate::model::{CommodityCreate, LocationCreate, Volatility};
use crate::routing::RouteSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SETTLE_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HUB_PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    #[error("HUB_SETTLE_INTERVAL_MS must be a positive number of milliseconds, got {0:?}")]
    InvalidInterval(String),

    #[error("cannot read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed file: {0}")]
    SeedParse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    pub port: u16,
    pub settle_interval: Duration,
    pub seed_path: Option<PathBuf>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            settle_interval: Duration::from_millis(DEFAULT_SETTLE_INTERVAL_MS),
            seed_path: None,
        }
    }
}

impl HubConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("HUB_PORT") {
            config.port = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
        }

        if let Some(raw) = lookup("HUB_SETTLE_INTERVAL_MS") {
            let ms: u64 = raw
                .trim()
                .parse()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::InvalidInterval(raw.clone()))?;
            config.settle_interval = Duration::from_millis(ms);
        }

        config.seed_path = lookup("HUB_SEED_PATH")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// The configured seed file, or the demo seed.
    pub fn load_seed(&self) -> Result<Seed, ConfigError> {
        match &self.seed_path {
            Some(path) => Seed::load(path),
            None => Ok(Seed::demo()),
        }
    }
}

/// Everything the hub starts with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Seed {
    pub locations: Vec<LocationCreate>,
    pub commodities: Vec<CommodityCreate>,
    pub routes: RouteSettings,
}

impl Seed {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Five locations, six commodities and the demo route network.
    pub fn demo() -> Self {
        let location = |name: &str, region: &str, stock, capacity, daily_usage| LocationCreate {
            name: name.to_string(),
            region: region.to_string(),
            stock,
            capacity,
            daily_usage,
        };
        let commodity = |name: &str, base_price, yield_rate, volatility, sentiment: &str| CommodityCreate {
            name: name.to_string(),
            base_price,
            yield_rate,
            volatility,
            sentiment: sentiment.to_string(),
        };

        Self {
            locations: vec![
                location("Mumbai HQ", "West", 1450, 5000, 320),
                location("Delhi Hub", "North", 7800, 8000, 600),
                location("Chennai Port", "South", 210, 4000, 400),
                location("Kolkata Yard", "East", 5600, 7000, 450),
                location("Pune Factory", "West", 890, 3000, 200),
            ],
            commodities: vec![
                commodity("Industrial Steel", 450.0, 0.95, Volatility::Medium, "Bullish"),
                commodity("Lithium Ion", 1200.0, 0.88, Volatility::High, "Bearish"),
                commodity("Microchips", 8500.0, 0.99, Volatility::High, "Bullish"),
                commodity("Copper Wire", 720.0, 0.92, Volatility::Medium, "Neutral"),
                commodity("Polymer Resin", 180.0, 0.85, Volatility::Low, "Stable"),
                commodity("Titanium Alloy", 3100.0, 0.97, Volatility::Medium, "Bullish"),
            ],
            routes: RouteSettings::demo(),
        }
    }
}
