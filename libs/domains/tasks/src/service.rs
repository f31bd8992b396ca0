//! Task Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;

/// Task service providing business logic operations
///
/// The service layer orchestrates repository operations; the repository is
/// injected through the constructor, so there is no ambient store handle.
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    /// Create a new TaskService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new task; unspecified fields take their defaults
    #[instrument(skip(self, input), fields(task_name = %input.name))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        self.repository.create(input).await
    }

    /// Get a task by ID
    #[instrument(skip(self))]
    pub async fn get_task(&self, id: Uuid) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// List every task in store-native order
    #[instrument(skip(self))]
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list().await
    }

    /// Merge the given fields into an existing task.
    ///
    /// Returns `None` when no task matches the id; the caller decides
    /// whether that is an error (for the HTTP contract it is not).
    #[instrument(skip(self, input))]
    pub async fn update_task(&self, id: Uuid, input: UpdateTask) -> TaskResult<Option<Task>> {
        self.repository.update(id, input).await
    }

    /// Delete a task. Succeeds whether or not a matching record existed.
    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: Uuid) -> TaskResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskPriority, TaskStatus};
    use crate::repository::MockTaskRepository;

    fn named(name: &str) -> CreateTask {
        CreateTask {
            name: name.to_string(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
        }
    }

    #[tokio::test]
    async fn test_create_task_returns_stored_record() {
        let mut repo = MockTaskRepository::new();
        repo.expect_create()
            .returning(|input| Ok(Task::new(input)));

        let service = TaskService::new(repo);
        let task = service.create_task(named("Buy milk")).await.unwrap();

        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.status, TaskStatus::Active);
    }

    #[tokio::test]
    async fn test_get_task_maps_miss_to_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = TaskService::new(repo);
        let err = service.get_task(Uuid::now_v7()).await.unwrap_err();

        assert!(matches!(err, TaskError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_task_passes_miss_through() {
        let mut repo = MockTaskRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let service = TaskService::new(repo);
        let result = service
            .update_task(Uuid::now_v7(), UpdateTask::default())
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_task_succeeds_without_match() {
        let mut repo = MockTaskRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = TaskService::new(repo);
        assert!(service.delete_task(Uuid::now_v7()).await.is_ok());
    }
}
