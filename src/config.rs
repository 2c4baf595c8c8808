use crate::error::{ExportError, Result};
use crate::utils::constants::{
    DEFAULT_BASE_URL, DEFAULT_MAX_DISTANCE_KM, DEFAULT_STATION_LIMIT, DEFAULT_TIMEOUT_SECS,
    ENV_PREFIX,
};
use config::{Config, Environment};
use serde::Deserialize;
use std::time::Duration;

/// Settings for the weather-data provider.
///
/// Defaults can be overridden with `METEO_EXPORT_BASE_URL`,
/// `METEO_EXPORT_MAX_DISTANCE_KM`, `METEO_EXPORT_STATION_LIMIT` and
/// `METEO_EXPORT_TIMEOUT_SECS`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
    pub max_distance_km: f64,
    pub station_limit: u64,
    pub timeout_secs: u64,
}

impl ProviderConfig {
    pub fn load() -> Result<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn from_environment(environment: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("max_distance_km", DEFAULT_MAX_DISTANCE_KM)?
            .set_default("station_limit", DEFAULT_STATION_LIMIT)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .add_source(environment)
            .build()?;

        let config: ProviderConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ExportError::config("base_url must not be empty"));
        }
        if !(self.max_distance_km > 0.0) {
            return Err(ExportError::config(format!(
                "max_distance_km must be positive, got {}",
                self.max_distance_km
            )));
        }
        if self.station_limit == 0 {
            return Err(ExportError::config("station_limit must be at least 1"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            station_limit: DEFAULT_STATION_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
