use crate::models::{RankingPolicy, ScoringWeights};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// JSON seed loaded into an empty database on startup
    #[serde(default = "default_seed_path")]
    pub seed_path: String,
    #[serde(default = "default_snapshot_ttl")]
    pub snapshot_ttl_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            seed_path: default_seed_path(),
            snapshot_ttl_secs: default_snapshot_ttl(),
        }
    }
}

fn default_seed_path() -> String { "data/breeds.json".to_string() }
fn default_snapshot_ttl() -> u64 { 300 }

/// Overrides for the ranking policy; unset fields keep the defaults
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub shelter_floor: Option<u8>,
    pub quality_floor: Option<u8>,
    pub max_results: Option<usize>,
    pub shelter_boost_per_point: Option<f64>,
    pub shelter_boost_cap: Option<f64>,
}

impl MatchingSettings {
    pub fn policy(&self) -> RankingPolicy {
        let defaults = RankingPolicy::default();
        RankingPolicy {
            shelter_floor: self.shelter_floor.unwrap_or(defaults.shelter_floor),
            quality_floor: self.quality_floor.unwrap_or(defaults.quality_floor),
            max_results: self.max_results.unwrap_or(defaults.max_results),
            shelter_boost_per_point: self
                .shelter_boost_per_point
                .unwrap_or(defaults.shelter_boost_per_point),
            shelter_boost_cap: self.shelter_boost_cap.unwrap_or(defaults.shelter_boost_cap),
            ..defaults
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: ScoringWeights,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PAWMATCH__)
    /// 5. DATABASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PAWMATCH__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        with_database_url(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        with_database_url(settings)?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("PAWMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Let the conventional DATABASE_URL win over the config file
fn with_database_url(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("DATABASE_URL") {
        Ok(url) => Config::builder()
            .add_source(settings)
            .set_override("database.url", url)?
            .build(),
        Err(_) => Ok(settings),
    }
}
