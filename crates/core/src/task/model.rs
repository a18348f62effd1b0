//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task status on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Backlog,
    Todo,
    InProgress,
    Done,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Backlog
    }
}

impl TaskStatus {
    /// Sort rank of the status.
    ///
    /// Follows the lexical order of the wire names (`backlog`, `done`,
    /// `in_progress`, `todo`). New variants must be given an explicit slot
    /// here instead of relying on string comparison.
    pub fn rank(self) -> u8 {
        match self {
            Self::Backlog => 0,
            Self::Done => 1,
            Self::InProgress => 2,
            Self::Todo => 3,
        }
    }
}

/// A task on a project board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub board_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    /// Higher value means more urgent
    pub priority: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task on the given board
    pub fn new(board_id: i64, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board_id,
            title: title.into(),
            description: None,
            status: TaskStatus::default(),
            priority: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Set the creation time (also used as the update time)
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }
}
