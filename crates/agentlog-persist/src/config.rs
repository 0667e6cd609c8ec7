use ::config::builder::{ConfigBuilder, DefaultState};
use ::config::Config as ConfigLoader;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{PersistError, Result};

pub const DEFAULT_DATABASE: &str = "ai_app";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_APP_NAME: &str = "agentlog";

/// Environment variables read by [`MongoConfig::with_env_overrides`], mapped to config keys.
/// Later names are fallbacks, consulted when earlier ones are unset or empty.
const ENV_KEYS: &[(&[&str], &str)] = &[
    (&["MONGODB_URI", "MONGO_URI"], "uri"),
    (&["MONGODB_DATABASE"], "database"),
    (&["MONGODB_TIMEOUT_MS"], "timeout_ms"),
    (&["MONGODB_APP_NAME"], "app_name"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    /// Connection string (secret, from ENV only in production)
    #[serde(default)]
    pub uri: String,
    #[serde(default = "default_database")]
    pub database: String,
    /// Server selection and connect timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: String::new(),
            database: default_database(),
            timeout_ms: default_timeout_ms(),
            app_name: default_app_name(),
        }
    }
}

impl MongoConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Load configuration from `.env` and `MONGODB_*` environment variables.
    ///
    /// For callers without config files; binaries layering TOML files use
    /// [`MongoConfig::with_env_overrides`] instead.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let builder = Self::with_env_overrides(ConfigLoader::builder(), None)?;
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay `MONGODB_*` environment variables onto a config builder.
    ///
    /// With `section` set, keys land under that table (`mongodb.uri`),
    /// otherwise at the top level.
    pub fn with_env_overrides(
        mut builder: ConfigBuilder<DefaultState>,
        section: Option<&str>,
    ) -> Result<ConfigBuilder<DefaultState>> {
        for (vars, key) in ENV_KEYS {
            // Empty counts as unset, so a blank URI still fails validation
            let value = vars
                .iter()
                .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()));
            let key = match section {
                Some(section) => format!("{}.{}", section, key),
                None => key.to_string(),
            };
            builder = builder.set_override_option(key, value)?;
        }
        Ok(builder)
    }

    pub fn validate(&self) -> Result<()> {
        if self.uri.trim().is_empty() {
            return Err(PersistError::Config(
                "MONGODB_URI (or MONGO_URI) environment variable is required".to_string(),
            ));
        }
        if self.database.trim().is_empty() {
            return Err(PersistError::Config("database name must not be empty".to_string()));
        }
        if self.timeout_ms == 0 {
            return Err(PersistError::Config("timeout_ms must be greater than zero".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
