use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[cfg(feature = "mongodb")]
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[cfg(feature = "mongodb")]
    #[error("BSON serialization error: {0}")]
    BsonSerialization(#[from] bson::ser::Error),

    #[cfg(feature = "mongodb")]
    #[error("BSON deserialization error: {0}")]
    BsonDeserialization(#[from] bson::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid agent log: {0}")]
    InvalidLog(String),
}

impl From<::config::ConfigError> for PersistError {
    fn from(err: ::config::ConfigError) -> Self {
        PersistError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PersistError>;
