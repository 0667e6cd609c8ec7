use async_trait::async_trait;

use crate::models::{AgentLog, NewAgentLog};
use crate::error::Result;

/// Trait for agent log persistence operations
///
/// Reads and mutations only ever see active (not soft-deleted) logs. When
/// several active logs share a `thread_id`, the oldest one is the one read
/// and the one mutated.
#[async_trait]
pub trait AgentLogStore: Send + Sync {
    /// Insert a new log, stamping `created_at` and `deleted = false`.
    /// Returns the id of the stored log.
    async fn create_log(&self, log: NewAgentLog) -> Result<String>;

    /// All active logs of a user, in insertion order
    async fn get_logs_by_user(&self, user_id: &str) -> Result<Vec<AgentLog>>;

    /// The active log of a thread, if any
    async fn get_log_by_thread(&self, thread_id: &str) -> Result<Option<AgentLog>>;

    /// Set the token count and `updated_at`. No-op when nothing matches.
    async fn update_tokens(&self, thread_id: &str, tokens: i64) -> Result<()>;

    /// Mark the log deleted and stamp `deleted_at`. No-op when nothing matches.
    async fn soft_delete_log(&self, thread_id: &str) -> Result<()>;
}
