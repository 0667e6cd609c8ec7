use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::models::{AgentLog, NewAgentLog};

/// MongoDB-specific agent log document (uses ObjectId and BSON datetimes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoAgentLog {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: String,
    pub thread_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<i64>,
    pub created_at: bson::DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<bson::DateTime>,
    // Absent counts as not deleted
    #[serde(default)]
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<bson::DateTime>,
}

impl MongoAgentLog {
    /// Build the document inserted for a new log
    pub fn from_new(log: NewAgentLog, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ObjectId::new(),
            user_id: log.user_id,
            thread_id: log.thread_id,
            event: log.event,
            model: log.model,
            tokens: log.tokens,
            created_at: bson::DateTime::from_chrono(created_at),
            updated_at: None,
            deleted: false,
            deleted_at: None,
        }
    }
}

// Conversion between MongoDB-specific and database-agnostic models

impl From<MongoAgentLog> for AgentLog {
    fn from(log: MongoAgentLog) -> Self {
        Self {
            id: log.id.to_hex(),
            user_id: log.user_id,
            thread_id: log.thread_id,
            event: log.event,
            model: log.model,
            tokens: log.tokens,
            created_at: log.created_at.to_chrono(),
            updated_at: log.updated_at.map(|t| t.to_chrono()),
            deleted: log.deleted,
            deleted_at: log.deleted_at.map(|t| t.to_chrono()),
        }
    }
}
