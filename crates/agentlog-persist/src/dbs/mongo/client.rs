use mongodb::{Client, Database, bson::doc};

use crate::builder::MongoConnectionBuilder;
use crate::config::MongoConfig;
use crate::error::{PersistError, Result};

/// Owns the connection to a MongoDB deployment.
///
/// A value of this type only exists after a successful health check. Share it
/// by reference; the driver pools connections internally. It is not `Clone`,
/// so [`MongoConnection::shutdown`] cannot close pools another owner still uses:
///
/// ```compile_fail
/// fn assert_clone<T: Clone>() {}
/// assert_clone::<agentlog_persist::MongoConnection>();
/// ```
pub struct MongoConnection {
    client: Client,
}

impl MongoConnection {
    pub fn builder() -> MongoConnectionBuilder {
        MongoConnectionBuilder::new()
    }

    /// Connect using loaded configuration
    pub async fn connect(config: &MongoConfig) -> Result<Self> {
        config.validate()?;

        Self::builder()
            .uri(&config.uri)
            .timeout(config.timeout())
            .app_name(&config.app_name)
            .connect()
            .await
    }

    /// Wrap a client and verify the server answers
    pub(crate) async fn from_client(client: Client) -> Result<Self> {
        let connection = Self { client };

        if let Err(e) = connection.ping().await {
            tracing::warn!(error = %e, "MongoDB health check failed");
            return Err(e);
        }

        tracing::info!("MongoDB connected");
        Ok(connection)
    }

    /// Run the `ping` admin command
    pub async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| PersistError::Connection(format!("MongoDB connection failed: {}", e)))?;
        Ok(())
    }

    /// Handle to a named database. No network round-trip.
    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }

    /// Close pooled connections and end server sessions.
    ///
    /// Database handles taken from [`MongoConnection::database`] share these
    /// pools and must not be used afterwards.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        tracing::info!("MongoDB connection closed");
    }
}
