//! API request and response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskboard_domain::{Task, TaskStatistics, TaskStatus, User};
use utoipa::ToSchema;

/// User registration request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Desired username
    pub username: String,
    /// Email address
    pub email: String,
    /// Plaintext password (hashed server-side, never stored)
    pub password: String,
}

/// Authentication request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    /// Username
    pub username: String,
    /// Password
    pub password: String,
}

/// Authentication response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// JWT bearer token
    pub token: String,
    /// Token expiration timestamp (unix seconds)
    pub expires_at: i64,
    /// User information
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// User ID
    pub id: String,
    /// Username
    pub username: String,
    /// Email
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            email: user.email().to_string(),
        }
    }
}

/// Task creation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Task title
    pub title: String,
    /// Start of the task's time window
    pub start_time: DateTime<Utc>,
    /// End of the window: estimate for pending, actual for finished
    pub end_time: DateTime<Utc>,
    /// Priority 1 (lowest) through 5 (highest)
    pub priority: u8,
    /// Lifecycle status; defaults to pending
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "pending")]
    pub status: Option<TaskStatus>,
}

/// Task update request; absent fields keep their current value
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    /// New title
    pub title: Option<String>,
    /// New start time
    pub start_time: Option<DateTime<Utc>>,
    /// New end time
    pub end_time: Option<DateTime<Utc>>,
    /// New priority
    pub priority: Option<u8>,
    /// New status
    #[schema(value_type = Option<String>, example = "finished")]
    pub status: Option<TaskStatus>,
}

/// Task response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task ID
    pub id: String,
    /// Title
    pub title: String,
    /// Start time
    pub start_time: DateTime<Utc>,
    /// End time
    pub end_time: DateTime<Utc>,
    /// Priority
    pub priority: u8,
    /// Status
    #[schema(value_type = String, example = "pending")]
    pub status: TaskStatus,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().to_string(),
            start_time: task.start_time(),
            end_time: task.end_time(),
            priority: task.priority().value(),
            status: task.status(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Task list response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskListResponse {
    /// Tasks in creation order
    pub tasks: Vec<TaskResponse>,
    /// Total count
    pub total: usize,
}

/// Statistics report response
///
/// Hour and percentage values are serialized as strings with exactly two
/// decimal places; percentages are `null` when there are no tasks.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    /// Count of all tasks considered
    pub total_tasks: usize,
    /// Share of finished tasks, e.g. "33.33"; null when no tasks exist
    pub completed_percentage: Option<String>,
    /// Share of pending tasks; complement of completedPercentage
    pub pending_percentage: Option<String>,
    /// Hours elapsed since start, summed over pending tasks
    pub pending_time_lapsed: String,
    /// Hours until estimated end, floored at zero per task, summed
    pub pending_time_remaining: String,
    /// Mean completion hours over finished tasks; "0.00" when none
    pub average_completion_time: String,
}

fn two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}

impl From<&TaskStatistics> for StatisticsResponse {
    fn from(stats: &TaskStatistics) -> Self {
        Self {
            total_tasks: stats.total_tasks,
            completed_percentage: stats.completed_percentage.map(two_decimals),
            pending_percentage: stats.pending_percentage.map(two_decimals),
            pending_time_lapsed: two_decimals(stats.pending_time_lapsed),
            pending_time_remaining: two_decimals(stats.pending_time_remaining),
            average_completion_time: two_decimals(stats.average_completion_time),
        }
    }
}

/// API health response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Version
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
    /// Task store status
    pub store: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_wire_field_names() {
        let stats = TaskStatistics {
            total_tasks: 2,
            completed_tasks: 1,
            pending_tasks: 1,
            completed_percentage: Some(50.0),
            pending_percentage: Some(50.0),
            pending_time_lapsed: 1.5,
            pending_time_remaining: 0.0,
            average_completion_time: 2.5,
            inverted_windows: 0,
        };

        let json = serde_json::to_value(StatisticsResponse::from(&stats)).unwrap();
        assert_eq!(json["totalTasks"], 2);
        assert_eq!(json["completedPercentage"], "50.00");
        assert_eq!(json["pendingPercentage"], "50.00");
        assert_eq!(json["pendingTimeLapsed"], "1.50");
        assert_eq!(json["pendingTimeRemaining"], "0.00");
        assert_eq!(json["averageCompletionTime"], "2.50");
    }

    #[test]
    fn test_statistics_empty_list_serializes_null_percentages() {
        let stats = TaskStatistics {
            total_tasks: 0,
            completed_tasks: 0,
            pending_tasks: 0,
            completed_percentage: None,
            pending_percentage: None,
            pending_time_lapsed: 0.0,
            pending_time_remaining: 0.0,
            average_completion_time: 0.0,
            inverted_windows: 0,
        };

        let json = serde_json::to_value(StatisticsResponse::from(&stats)).unwrap();
        assert!(json["completedPercentage"].is_null());
        assert!(json["pendingPercentage"].is_null());
        assert_eq!(json["averageCompletionTime"], "0.00");
    }

    #[test]
    fn test_create_request_rejects_unknown_status() {
        let body = r#"{"title":"t","startTime":"2024-01-01T00:00:00Z","endTime":"2024-01-01T01:00:00Z","priority":3,"status":"archived"}"#;
        assert!(serde_json::from_str::<CreateTaskRequest>(body).is_err());
    }
}
