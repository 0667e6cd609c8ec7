use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::error::{PersistError, Result};

/// Database-agnostic agent log model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentLog {
    pub id: String,
    pub user_id: String,
    pub thread_id: String,
    pub event: Option<String>,
    pub model: Option<String>,
    pub tokens: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl AgentLog {
    /// A log is active until it has been soft-deleted
    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}

/// Caller-supplied fields for a new agent log.
///
/// `created_at` and `deleted` are owned by the store and cannot be set here;
/// deserialization rejects them like any other unknown field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewAgentLog {
    pub user_id: String,
    pub thread_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<i64>,
}

impl NewAgentLog {
    pub fn new(user_id: impl Into<String>, thread_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            thread_id: thread_id.into(),
            event: None,
            model: None,
            tokens: None,
        }
    }

    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn tokens(mut self, tokens: i64) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Reject logs that cannot be looked up again
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(PersistError::InvalidLog("user_id must not be empty".to_string()));
        }
        if self.thread_id.trim().is_empty() {
            return Err(PersistError::InvalidLog("thread_id must not be empty".to_string()));
        }
        Ok(())
    }

    /// Materialize as a freshly created, active log
    pub(crate) fn into_log(self, id: String, created_at: DateTime<Utc>) -> AgentLog {
        AgentLog {
            id,
            user_id: self.user_id,
            thread_id: self.thread_id,
            event: self.event,
            model: self.model,
            tokens: self.tokens,
            created_at,
            updated_at: None,
            deleted: false,
            deleted_at: None,
        }
    }
}
