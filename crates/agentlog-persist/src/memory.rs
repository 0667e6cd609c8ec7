use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use crate::models::{AgentLog, NewAgentLog};
use crate::store::AgentLogStore;
use crate::error::Result;

/// Process-local agent log store.
///
/// Holds logs in insertion order, so "oldest active log of a thread" is the
/// first active match in the vector.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAgentLogStore {
    logs: Arc<RwLock<Vec<AgentLog>>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryAgentLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored logs, soft-deleted ones included
    pub async fn len(&self) -> usize {
        self.logs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.logs.read().await.is_empty()
    }

    /// Every stored log, soft-deleted ones included
    pub async fn snapshot(&self) -> Vec<AgentLog> {
        self.logs.read().await.clone()
    }

    fn generate_id(&self) -> String {
        // Same width as an ObjectId hex string
        format!("{:024x}", self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

#[async_trait]
impl AgentLogStore for InMemoryAgentLogStore {
    async fn create_log(&self, log: NewAgentLog) -> Result<String> {
        log.validate()?;

        let id = self.generate_id();
        let log = log.into_log(id.clone(), Utc::now());
        self.logs.write().await.push(log);
        Ok(id)
    }

    async fn get_logs_by_user(&self, user_id: &str) -> Result<Vec<AgentLog>> {
        let logs = self.logs.read().await;
        Ok(logs
            .iter()
            .filter(|log| log.user_id == user_id && log.is_active())
            .cloned()
            .collect())
    }

    async fn get_log_by_thread(&self, thread_id: &str) -> Result<Option<AgentLog>> {
        let logs = self.logs.read().await;
        Ok(logs
            .iter()
            .find(|log| log.thread_id == thread_id && log.is_active())
            .cloned())
    }

    async fn update_tokens(&self, thread_id: &str, tokens: i64) -> Result<()> {
        let mut logs = self.logs.write().await;
        if let Some(log) = logs.iter_mut().find(|log| log.thread_id == thread_id && log.is_active()) {
            log.tokens = Some(tokens);
            log.updated_at = Some(Utc::now().max(log.created_at + Duration::milliseconds(1)));
        }
        Ok(())
    }

    async fn soft_delete_log(&self, thread_id: &str) -> Result<()> {
        let mut logs = self.logs.write().await;
        if let Some(log) = logs.iter_mut().find(|log| log.thread_id == thread_id && log.is_active()) {
            log.deleted = true;
            log.deleted_at = Some(Utc::now());
        }
        Ok(())
    }
}
