pub use self::parser::{
    ChartConfig, Config, CurveSpec, DatabaseConfig, LoggingConfig, SamplingConfig, ServerConfig,
};
pub use self::validator::ConfigError;

mod parser;
mod validator;
