pub mod client;
pub mod models;
pub mod repositories;

pub use client::MongoConnection;
pub use models::MongoAgentLog;
pub use repositories::{AgentLogRepository, AGENT_LOGS_COLLECTION};
