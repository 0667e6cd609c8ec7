mod agent_log;

// Export database-agnostic models
pub use agent_log::{AgentLog, NewAgentLog};
