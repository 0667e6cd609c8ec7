use ::config::{Config as ConfigLoader, File};
use agentlog_persist::{MongoConfig, PersistError};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mongodb: MongoConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. MONGODB_* and LOG_* environment variables
    ///
    /// The MongoDB URI is not checked here; connecting validates it.
    pub fn load() -> Result<Self, PersistError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .set_override_option("logging.level", non_empty_var("LOG_LEVEL"))?
            .set_override_option("logging.format", non_empty_var("LOG_FORMAT"))?;
        let builder = MongoConfig::with_env_overrides(builder, Some("mongodb"))?;

        Ok(builder.build()?.try_deserialize()?)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
