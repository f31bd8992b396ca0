//! HTTP client for the tasks API.
//!
//! The wire types mirror the server's camelCase JSON shape; `priority` is
//! kept as an opaque string because the UI never surfaces it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Task status, as serialized on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Active,
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

/// A task record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub status: TaskStatus,
    pub priority: String,
    pub due_date: DateTime<Utc>,
}

/// Create request body: the server fills everything else with defaults
#[derive(Debug, Clone, Serialize)]
pub struct CreateTask {
    pub name: String,
    pub status: TaskStatus,
}

/// Update request body; omitted fields are preserved by the server
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl UpdateTask {
    /// The full record of an existing task, for resend-style updates
    /// (status toggling sends the whole task back).
    pub fn full(task: &Task) -> Self {
        Self {
            name: Some(task.name.clone()),
            status: Some(task.status),
            priority: Some(task.priority.clone()),
            due_date: Some(task.due_date),
        }
    }

    /// A name-only update, for the edit flow.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Errors surfaced by the API layer.
///
/// Failures are returned to the caller, never swallowed here; presentation
/// decides what to do with them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Status(reqwest::StatusCode),
}

/// Thin reqwest wrapper around the tasks endpoints
#[derive(Clone)]
pub struct TasksApi {
    http: reqwest::Client,
    base_url: String,
}

impl TasksApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn task_url(&self, id: Uuid) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }

    /// Fetch the full task list
    pub async fn list(&self) -> Result<Vec<Task>, ApiError> {
        let response = self.http.get(self.tasks_url()).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Create a task and return the stored record
    pub async fn create(&self, input: &CreateTask) -> Result<Task, ApiError> {
        let response = self.http.post(self.tasks_url()).json(input).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Update a task. `None` means the server had no matching record.
    pub async fn update(&self, id: Uuid, input: &UpdateTask) -> Result<Option<Task>, ApiError> {
        let response = self
            .http
            .put(self.task_url(id))
            .json(input)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Delete a task. Success carries no body.
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        let response = self.http.delete(self.task_url(id)).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(())
    }
}
