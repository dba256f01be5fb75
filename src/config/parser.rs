use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            sampling: SamplingConfig::default(),
            logging: LoggingConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            filename: Some(default_db_filename()),
        }
    }
}

impl DatabaseConfig {
    pub fn connection_string(&self) -> String {
        if let Some(ref url) = self.url {
            url.clone()
        } else if let Some(ref file) = self.filename {
            file.clone()
        } else {
            String::new()
        }
    }

    /// Filesystem path of the SQLite database. Accepts both a bare
    /// filename and a `sqlite://` URL.
    pub fn sqlite_path(&self) -> String {
        let url = self.connection_string();
        url.strip_prefix("sqlite://").unwrap_or(&url).to_string()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SamplingConfig {
    #[serde(default = "default_samples")]
    pub samples: u32,
    #[serde(default = "default_x_min")]
    pub x_min: f64,
    #[serde(default = "default_x_max")]
    pub x_max: f64,
    #[serde(default = "default_curves")]
    pub curves: Vec<CurveSpec>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            x_min: default_x_min(),
            x_max: default_x_max(),
            curves: default_curves(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurveSpec {
    pub name: String,
    #[serde(default)]
    pub label: String,
    pub mean: f64,
    #[serde(default = "default_sigma")]
    pub sigma: f64,
    #[serde(default = "default_color")]
    pub color: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChartConfig {
    #[serde(default = "default_chart_title")]
    pub title: String,
    #[serde(default = "default_xaxis_title")]
    pub xaxis_title: String,
    #[serde(default = "default_yaxis_title")]
    pub yaxis_title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: default_chart_title(),
            xaxis_title: default_xaxis_title(),
            yaxis_title: default_yaxis_title(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var("CONFIG_PATH") {
            // An explicitly named config file must exist.
            Ok(path) => Self::load_from_file(path),
            Err(_) => Self::load_or_default("config.yaml"),
        }
    }

    /// Loads the given file, or falls back to the built-in demonstration
    /// defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("GAUSSBOARD_DATABASE_URL") {
            self.database.url = Some(value);
        }
        if let Ok(value) = std::env::var("GAUSSBOARD_PORT") {
            if let Ok(port) = value.parse() {
                self.server.port = port;
            }
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_db_filename() -> String {
    "gaussboard.db".to_string()
}

fn default_samples() -> u32 {
    101
}

fn default_x_min() -> f64 {
    -10.0
}

fn default_x_max() -> f64 {
    10.0
}

fn default_sigma() -> f64 {
    2.0
}

fn default_color() -> String {
    "black".to_string()
}

fn default_curves() -> Vec<CurveSpec> {
    vec![
        CurveSpec {
            name: "m0s2".to_string(),
            label: "Gaussian #1".to_string(),
            mean: 0.0,
            sigma: 2.0,
            color: "red".to_string(),
        },
        CurveSpec {
            name: "mN5s2".to_string(),
            label: "Gaussian #2".to_string(),
            mean: -5.0,
            sigma: 2.0,
            color: "blue".to_string(),
        },
        CurveSpec {
            name: "m5s2".to_string(),
            label: "Gaussian #3".to_string(),
            mean: 5.0,
            sigma: 2.0,
            color: "purple".to_string(),
        },
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_chart_title() -> String {
    "Database Data".to_string()
}

fn default_xaxis_title() -> String {
    "Abscissa".to_string()
}

fn default_yaxis_title() -> String {
    "Ordinate".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_demo_curves() {
        let config = Config::default();
        assert_eq!(config.sampling.samples, 101);
        assert_eq!(config.sampling.x_min, -10.0);
        assert_eq!(config.sampling.x_max, 10.0);

        let names: Vec<&str> = config
            .sampling
            .curves
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["m0s2", "mN5s2", "m5s2"]);
        assert!(config.sampling.curves.iter().all(|c| c.sigma == 2.0));
    }

    #[test]
    fn parses_partial_yaml_with_defaults() {
        let yaml = r#"
server:
  port: 9000
sampling:
  samples: 11
"#;
        let config: Config = serde_yaml::from_str(yaml).expect("parse config");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.sampling.samples, 11);
        assert_eq!(config.sampling.curves.len(), 3);
        assert_eq!(config.chart.title, "Database Data");
    }

    #[test]
    fn sqlite_path_strips_url_scheme() {
        let config = DatabaseConfig {
            url: Some("sqlite:///tmp/demo.db".to_string()),
            filename: None,
        };
        assert_eq!(config.sqlite_path(), "/tmp/demo.db");

        let config = DatabaseConfig {
            url: None,
            filename: Some("demo.db".to_string()),
        };
        assert_eq!(config.sqlite_path(), "demo.db");
    }
}
