use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

/// Task status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskStatus {
    /// Task is still open
    #[default]
    Active,
    /// Task has been marked done
    Completed,
}

impl TaskStatus {
    /// The opposite status; flipping twice returns the original.
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Active => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Active,
        }
    }
}

/// Task priority
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// Task entity - represents a task stored in MongoDB.
///
/// Wire format is camelCase JSON:
/// `{ "id": ..., "name": ..., "status": ..., "priority": ..., "dueDate": ... }`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned on creation and immutable afterwards
    pub id: Uuid,
    /// Free-text label; no length or uniqueness constraint
    pub name: String,
    /// Current status
    pub status: TaskStatus,
    /// Priority level
    pub priority: TaskPriority,
    /// Due timestamp; defaults to creation time
    pub due_date: DateTime<Utc>,
}

/// DTO for creating a new task.
///
/// Every field except `name` is optional; unspecified fields take their
/// documented defaults (`active`, `medium`, now).
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub name: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
}

/// DTO for updating an existing task.
///
/// All fields are optional; omitted fields are preserved on the stored
/// record. The merge happens in [`Task::apply_update`], not in the store.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub name: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new task from a CreateTask DTO, filling defaults.
    pub fn new(input: CreateTask) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            status: input.status,
            priority: input.priority,
            due_date: input.due_date.unwrap_or_else(Utc::now),
        }
    }

    /// Merge an UpdateTask DTO into this task. `None` fields are left
    /// untouched.
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_named(name: &str) -> CreateTask {
        CreateTask {
            name: name.to_string(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
        }
    }

    #[test]
    fn test_new_task_fills_defaults() {
        let before = Utc::now();
        let task = Task::new(create_named("Buy milk"));

        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.status, TaskStatus::Active);
        assert_eq!(task.priority, TaskPriority::Medium);
        assert!(task.due_date >= before);
    }

    #[test]
    fn test_new_tasks_get_distinct_ids() {
        let a = Task::new(create_named("a"));
        let b = Task::new(create_named("b"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_status_toggled_twice_is_identity() {
        let status = TaskStatus::Active;
        assert_eq!(status.toggled(), TaskStatus::Completed);
        assert_eq!(status.toggled().toggled(), status);
    }

    #[test]
    fn test_apply_update_preserves_omitted_fields() {
        let mut task = Task::new(create_named("original"));
        let original_due = task.due_date;

        task.apply_update(UpdateTask {
            name: Some("renamed".to_string()),
            ..Default::default()
        });

        assert_eq!(task.name, "renamed");
        assert_eq!(task.status, TaskStatus::Active);
        assert_eq!(task.priority, TaskPriority::Medium);
        assert_eq!(task.due_date, original_due);
    }

    #[test]
    fn test_apply_update_replaces_all_given_fields() {
        let mut task = Task::new(create_named("original"));

        task.apply_update(UpdateTask {
            name: Some("done".to_string()),
            status: Some(TaskStatus::Completed),
            priority: Some(TaskPriority::High),
            due_date: None,
        });

        assert_eq!(task.name, "done");
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.priority, TaskPriority::High);
    }

    #[test]
    fn test_task_wire_format_is_camel_case() {
        let task = Task::new(create_named("wire"));
        let json = serde_json::to_value(&task).unwrap();

        assert!(json.get("id").is_some());
        assert!(json.get("dueDate").is_some());
        assert_eq!(json["status"], "active");
        assert_eq!(json["priority"], "medium");
    }

    #[test]
    fn test_create_task_accepts_name_only() {
        let input: CreateTask = serde_json::from_str(r#"{"name":"Buy milk"}"#).unwrap();
        assert_eq!(input.name, "Buy milk");
        assert_eq!(input.status, TaskStatus::Active);
        assert_eq!(input.priority, TaskPriority::Medium);
        assert!(input.due_date.is_none());
    }

    #[test]
    fn test_status_display_is_lowercase() {
        assert_eq!(TaskStatus::Completed.to_string(), "completed");
        assert_eq!(TaskPriority::High.to_string(), "high");
    }
}
