//! The task model and its validation from wire records.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskPriority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A validated task as held by the client.
///
/// `id`, `created_by` and `created_at` are never changed client-side; the
/// update payload has no fields for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// A task exactly as the persistence API sends it.
///
/// Status and priority stay strings until [`Task::try_from`] checks them
/// against the closed enums.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Data-integrity violations found in records coming from the API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskDataError {
    #[error("Task {task_id} has an empty title")]
    EmptyTitle { task_id: String },

    #[error("Task {task_id} has unknown status '{value}'")]
    UnknownStatus { task_id: String, value: String },

    #[error("Task {task_id} has unknown priority '{value}'")]
    UnknownPriority { task_id: String, value: String },

    #[error("Task id {0} appears more than once")]
    DuplicateId(String),
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskDataError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        if record.title.trim().is_empty() {
            return Err(TaskDataError::EmptyTitle { task_id: record.id });
        }
        let status = record
            .status
            .parse::<TaskStatus>()
            .map_err(|value| TaskDataError::UnknownStatus {
                task_id: record.id.clone(),
                value,
            })?;
        let priority = record
            .priority
            .parse::<TaskPriority>()
            .map_err(|value| TaskDataError::UnknownPriority {
                task_id: record.id.clone(),
                value,
            })?;
        let description = record
            .description
            .filter(|description| !description.trim().is_empty());

        Ok(Task {
            id: record.id,
            title: record.title,
            description,
            status,
            priority,
            created_by: record.created_by,
            created_at: record.created_at,
        })
    }
}

/// Validates a fetched collection. One bad record fails the whole batch.
pub fn validate_records(records: Vec<TaskRecord>) -> Result<Vec<Task>, TaskDataError> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut tasks = Vec::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.clone()) {
            return Err(TaskDataError::DuplicateId(record.id));
        }
        tasks.push(Task::try_from(record)?);
    }
    Ok(tasks)
}

/// Response body of the task listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksResponse {
    pub tasks: Vec<TaskRecord>,
}

/// Payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

/// Partial update of a task. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

impl UpdateTaskRequest {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, status: &str, priority: &str) -> TaskRecord {
        TaskRecord {
            id: id.to_string(),
            title: format!("Task {id}"),
            description: None,
            status: status.to_string(),
            priority: priority.to_string(),
            created_by: "owner".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn record_with_known_values_becomes_task() {
        let mut raw = record("1", "in_progress", "high");
        raw.description = Some("  ".to_string());

        let task = Task::try_from(raw).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.description, None);
    }

    #[test]
    fn unknown_status_is_a_data_error() {
        let err = Task::try_from(record("7", "archived", "low")).unwrap_err();
        assert_eq!(
            err,
            TaskDataError::UnknownStatus {
                task_id: "7".to_string(),
                value: "archived".to_string()
            }
        );
    }

    #[test]
    fn unknown_priority_is_a_data_error() {
        let err = Task::try_from(record("8", "pending", "urgent")).unwrap_err();
        assert!(matches!(err, TaskDataError::UnknownPriority { .. }));
    }

    #[test]
    fn empty_title_is_a_data_error() {
        let mut raw = record("9", "pending", "low");
        raw.title = "   ".to_string();
        assert!(matches!(
            Task::try_from(raw),
            Err(TaskDataError::EmptyTitle { .. })
        ));
    }

    #[test]
    fn duplicate_ids_fail_the_batch() {
        let records = vec![
            record("a", "pending", "low"),
            record("b", "pending", "low"),
            record("a", "completed", "high"),
        ];
        assert_eq!(
            validate_records(records),
            Err(TaskDataError::DuplicateId("a".to_string()))
        );
    }

    #[test]
    fn validate_records_keeps_order() {
        let records = vec![record("c", "pending", "low"), record("a", "completed", "high")];
        let ids: Vec<_> = validate_records(records)
            .unwrap()
            .into_iter()
            .map(|task| task.id)
            .collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn status_update_serializes_only_status() {
        let body = serde_json::to_value(UpdateTaskRequest::status(TaskStatus::Completed)).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "completed" }));
    }

    #[test]
    fn create_request_omits_absent_fields() {
        let body = serde_json::to_value(CreateTaskRequest {
            title: "Ship release".to_string(),
            description: None,
            priority: Some(TaskPriority::High),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "title": "Ship release", "priority": "high" })
        );
    }
}
