pub mod agent_log;

pub use agent_log::{AgentLogRepository, AGENT_LOGS_COLLECTION};
