//! Task entity representing a unit of tracked work

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{Priority, TaskId, TaskStatus};

/// A unit of tracked work with a title, time window, priority, and status.
///
/// For a pending task `end_time` is the estimated completion time; once the
/// task is finished it records the actual completion time. Both timestamps
/// are required, so aggregation never sees a task without a time window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    priority: Priority,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task, validating the title
    pub fn new(
        title: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        priority: Priority,
        status: TaskStatus,
    ) -> DomainResult<Self> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(DomainError::validation("title", "must not be empty"));
        }

        let now = Utc::now();
        Ok(Self {
            id: TaskId::new(),
            title,
            start_time,
            end_time,
            priority,
            status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get task ID
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Get title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get start time
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Get end time (actual for finished tasks, estimated for pending)
    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    /// Get priority
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Get status
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Get created timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get updated timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether the end time precedes the start time
    ///
    /// Such windows are kept (data quality surfaces in the statistics
    /// report) rather than rejected or clamped.
    pub fn has_inverted_window(&self) -> bool {
        self.end_time < self.start_time
    }

    /// Rename the task
    pub fn rename(&mut self, title: String) -> DomainResult<()> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(DomainError::validation("title", "must not be empty"));
        }
        self.title = title;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Move the task's time window
    pub fn reschedule(&mut self, start_time: DateTime<Utc>, end_time: DateTime<Utc>) {
        self.start_time = start_time;
        self.end_time = end_time;
        self.updated_at = Utc::now();
    }

    /// Change priority
    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
        self.updated_at = Utc::now();
    }

    /// Change status
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
