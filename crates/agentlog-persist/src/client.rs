use crate::config::MongoConfig;
use crate::dbs::mongo::{AgentLogRepository, MongoConnection};
use crate::error::Result;

/// Connection plus the repositories bound to one database
pub struct PersistClient {
    connection: MongoConnection,
    log_repo: AgentLogRepository,
}

impl PersistClient {
    pub async fn connect(config: &MongoConfig) -> Result<Self> {
        let connection = MongoConnection::connect(config).await?;
        Ok(Self::new(connection, &config.database))
    }

    pub fn new(connection: MongoConnection, db_name: &str) -> Self {
        let log_repo = AgentLogRepository::new(&connection.database(db_name));
        Self {
            connection,
            log_repo,
        }
    }

    pub fn logs(&self) -> &AgentLogRepository {
        &self.log_repo
    }

    pub fn connection(&self) -> &MongoConnection {
        &self.connection
    }

    pub async fn shutdown(self) {
        self.connection.shutdown().await;
    }
}
