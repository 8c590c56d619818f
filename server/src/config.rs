use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

/// Runtime settings, read from `TODO_*` environment variables over defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Start with the five starter todos instead of an empty list.
    pub seed: bool,
    pub log_level: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::build(Environment::with_prefix("TODO").try_parsing(true))
    }

    fn build(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 3000)?
            .set_default("seed", true)?
            .set_default("log_level", "info")?
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
