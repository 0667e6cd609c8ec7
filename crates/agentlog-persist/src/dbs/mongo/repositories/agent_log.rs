use mongodb::{Collection, Database, bson, bson::doc, bson::Document, bson::oid::ObjectId};
use futures::TryStreamExt;
use async_trait::async_trait;
use chrono::Utc;

use crate::dbs::mongo::models::MongoAgentLog;
use crate::models::{AgentLog, NewAgentLog};
use crate::store::AgentLogStore;
use crate::error::Result;

pub const AGENT_LOGS_COLLECTION: &str = "agent_logs";

#[derive(Clone)]
pub struct AgentLogRepository {
    collection: Collection<MongoAgentLog>,
}

impl AgentLogRepository {
    pub fn new(database: &Database) -> Self {
        let collection = database.collection(AGENT_LOGS_COLLECTION);
        Self { collection }
    }

    /// Insert a new log
    pub async fn create_log(&self, log: NewAgentLog) -> Result<ObjectId> {
        log.validate()?;

        let document = MongoAgentLog::from_new(log, Utc::now());
        self.collection.insert_one(&document).await?;

        tracing::debug!(
            log_id = %document.id,
            thread_id = %document.thread_id,
            "Agent log created"
        );
        Ok(document.id)
    }

    /// Get all active logs for a user
    pub async fn get_logs_by_user(&self, user_id: &str) -> Result<Vec<AgentLog>> {
        let logs: Vec<MongoAgentLog> = self.collection
            .find(active_user_filter(user_id))
            .sort(oldest_first())
            .await?
            .try_collect()
            .await?;

        tracing::debug!(user_id, count = logs.len(), "Fetched agent logs by user");
        Ok(logs.into_iter().map(Into::into).collect())
    }

    /// Get the active log for a thread
    pub async fn get_log_by_thread(&self, thread_id: &str) -> Result<Option<AgentLog>> {
        let log = self.collection
            .find_one(active_thread_filter(thread_id))
            .sort(oldest_first())
            .await?;
        Ok(log.map(Into::into))
    }

    /// Update token count
    pub async fn update_tokens(&self, thread_id: &str, tokens: i64) -> Result<()> {
        let updated = self.collection
            .find_one_and_update(active_thread_filter(thread_id), tokens_update(tokens, bson::DateTime::now()))
            .sort(oldest_first())
            .await?;

        tracing::debug!(thread_id, tokens, matched = updated.is_some(), "Agent log tokens updated");
        Ok(())
    }

    /// Soft delete (mark as deleted)
    pub async fn soft_delete_log(&self, thread_id: &str) -> Result<()> {
        let deleted = self.collection
            .find_one_and_update(active_thread_filter(thread_id), soft_delete_update(bson::DateTime::now()))
            .sort(oldest_first())
            .await?;

        tracing::debug!(thread_id, matched = deleted.is_some(), "Agent log soft deleted");
        Ok(())
    }
}

#[async_trait]
impl AgentLogStore for AgentLogRepository {
    async fn create_log(&self, log: NewAgentLog) -> Result<String> {
        let id = AgentLogRepository::create_log(self, log).await?;
        Ok(id.to_hex())
    }

    async fn get_logs_by_user(&self, user_id: &str) -> Result<Vec<AgentLog>> {
        AgentLogRepository::get_logs_by_user(self, user_id).await
    }

    async fn get_log_by_thread(&self, thread_id: &str) -> Result<Option<AgentLog>> {
        AgentLogRepository::get_log_by_thread(self, thread_id).await
    }

    async fn update_tokens(&self, thread_id: &str, tokens: i64) -> Result<()> {
        AgentLogRepository::update_tokens(self, thread_id, tokens).await
    }

    async fn soft_delete_log(&self, thread_id: &str) -> Result<()> {
        AgentLogRepository::soft_delete_log(self, thread_id).await
    }
}

// Absent and false both count as active
fn not_deleted() -> Document {
    doc! { "$ne": true }
}

fn oldest_first() -> Document {
    doc! { "_id": 1 }
}

fn active_user_filter(user_id: &str) -> Document {
    doc! { "user_id": user_id, "deleted": not_deleted() }
}

fn active_thread_filter(thread_id: &str) -> Document {
    doc! { "thread_id": thread_id, "deleted": not_deleted() }
}

/// Update pipeline keeping `updated_at` strictly after `created_at` at millisecond precision
fn tokens_update(tokens: i64, now: bson::DateTime) -> Vec<Document> {
    vec![doc! {
        "$set": {
            "tokens": tokens,
            "updated_at": { "$max": [now, { "$add": ["$created_at", 1_i64] }] }
        }
    }]
}

fn soft_delete_update(now: bson::DateTime) -> Document {
    doc! {
        "$set": {
            "deleted": true,
            "deleted_at": now
        }
    }
}
