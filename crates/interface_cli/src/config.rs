//! CLI configuration
//!
//! Read from `ESTIMATE_*` environment variables; every field has a default.
//!
//! * `ESTIMATE_DATABASE_URL` - PostgreSQL connection string
//! * `ESTIMATE_MAX_CONNECTIONS` - Pool size (default: 5)
//! * `ESTIMATE_TIMEZONE` - IANA zone that decides "today" (default: Asia/Tokyo)
//! * `ESTIMATE_LOG_LEVEL` - trace, debug, info, warn, error (default: warn)

use serde::Deserialize;

use core_kernel::{TemporalError, Timezone};
use infra_db::DatabaseConfig;

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    /// Database URL
    pub database_url: String,
    /// Maximum pool connections
    pub max_connections: u32,
    /// Time zone name
    pub timezone: String,
    /// Log level
    pub log_level: String,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost/estimate".to_string(),
            max_connections: 5,
            timezone: Timezone::default().name().to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl EstimateConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix("ESTIMATE"))
    }

    /// Loads configuration from an environment source
    pub fn from_environment(source: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(source.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the pool settings for the configured database
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.clone())
            .max_connections(self.max_connections)
            .min_connections(1)
    }

    /// Resolves the configured time zone
    pub fn timezone(&self) -> Result<Timezone, TemporalError> {
        self.timezone.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("ESTIMATE").source(Some(map))
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EstimateConfig::from_environment(environment(&[])).unwrap();

        assert_eq!(config.max_connections, 5);
        assert_eq!(config.timezone().unwrap().name(), "Asia/Tokyo");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_values_from_environment() {
        let config = EstimateConfig::from_environment(environment(&[
            ("ESTIMATE_DATABASE_URL", "postgres://db:5432/quotes"),
            ("ESTIMATE_MAX_CONNECTIONS", "12"),
            ("ESTIMATE_TIMEZONE", "Europe/London"),
        ]))
        .unwrap();

        let database = config.database_config();
        assert_eq!(database.url, "postgres://db:5432/quotes");
        assert_eq!(database.max_connections, 12);
        assert_eq!(config.timezone().unwrap().name(), "Europe/London");
    }

    #[test]
    fn test_unknown_timezone() {
        let config = EstimateConfig {
            timezone: "Mars/Olympus".to_string(),
            ..EstimateConfig::default()
        };
        assert!(matches!(config.timezone(), Err(TemporalError::UnknownTimezone(_))));
    }
}
