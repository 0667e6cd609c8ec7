use std::time::Duration;
use mongodb::{Client, options::ClientOptions};

use crate::config::DEFAULT_TIMEOUT_MS;
use crate::dbs::mongo::MongoConnection;
use crate::error::{Result, PersistError};

pub struct MongoConnectionBuilder {
    uri: Option<String>,
    timeout: Duration,
    app_name: Option<String>,
}

impl MongoConnectionBuilder {
    pub fn new() -> Self {
        Self {
            uri: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            app_name: None,
        }
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Bound on server selection and on opening each connection
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    fn require_uri(&self) -> Result<&str> {
        self.uri
            .as_deref()
            .filter(|uri| !uri.trim().is_empty())
            .ok_or_else(|| PersistError::Config("mongodb uri is required".to_string()))
    }

    pub async fn connect(self) -> Result<MongoConnection> {
        let uri = self.require_uri()?;

        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| PersistError::Connection(format!("Invalid MongoDB URI: {}", e)))?;
        options.server_selection_timeout = Some(self.timeout);
        options.connect_timeout = Some(self.timeout);
        if let Some(app_name) = self.app_name {
            options.app_name = Some(app_name);
        }

        let client = Client::with_options(options)
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        MongoConnection::from_client(client).await
    }
}

impl Default for MongoConnectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
