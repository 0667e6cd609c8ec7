pub mod config;
pub mod error;
pub mod memory;
pub mod models;
pub mod store;

#[cfg(feature = "mongodb")]
pub mod builder;
#[cfg(feature = "mongodb")]
pub mod client;
#[cfg(feature = "mongodb")]
pub mod dbs;

pub use crate::config::MongoConfig;
pub use error::{PersistError, Result};
pub use memory::InMemoryAgentLogStore;
pub use models::{AgentLog, NewAgentLog};
pub use store::AgentLogStore;

#[cfg(feature = "mongodb")]
pub use builder::MongoConnectionBuilder;
#[cfg(feature = "mongodb")]
pub use client::PersistClient;
#[cfg(feature = "mongodb")]
pub use dbs::mongo::{AgentLogRepository, MongoAgentLog, MongoConnection, AGENT_LOGS_COLLECTION};
