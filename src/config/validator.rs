use std::collections::HashSet;

use thiserror::Error;

use super::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidConfig(
                "server.port must be between 1 and 65535".to_string(),
            ));
        }

        if self.database.connection_string().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "database connection string cannot be empty".to_string(),
            ));
        }

        if self.sampling.samples == 0 {
            return Err(ConfigError::InvalidConfig(
                "sampling.samples must be at least 1".to_string(),
            ));
        }

        if self.sampling.x_min >= self.sampling.x_max {
            return Err(ConfigError::InvalidConfig(
                "sampling.x_min must be less than sampling.x_max".to_string(),
            ));
        }

        if self.sampling.curves.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "sampling.curves cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for curve in &self.sampling.curves {
            if curve.name.is_empty() {
                return Err(ConfigError::InvalidConfig(
                    "curve name cannot be empty".to_string(),
                ));
            }
            if curve.sigma <= 0.0 {
                return Err(ConfigError::InvalidConfig(format!(
                    "curve '{}' has non-positive sigma",
                    curve.name
                )));
            }
            if !seen.insert(curve.name.as_str()) {
                return Err(ConfigError::InvalidConfig(format!(
                    "duplicate curve name '{}'",
                    curve.name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, ConfigError};

    #[test]
    fn default_config_is_valid() {
        Config::default().validate().expect("default config");
    }

    #[test]
    fn rejects_zero_samples() {
        let mut config = Config::default();
        config.sampling.samples = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_inverted_range() {
        let mut config = Config::default();
        config.sampling.x_min = 5.0;
        config.sampling.x_max = -5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_duplicate_curve_names() {
        let mut config = Config::default();
        let dup = config.sampling.curves[0].clone();
        config.sampling.curves.push(dup);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_sigma() {
        let mut config = Config::default();
        config.sampling.curves[0].sigma = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_connection_string() {
        let mut config = Config::default();
        config.database.url = None;
        config.database.filename = None;
        assert!(config.validate().is_err());
    }
}
