use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task, UpdateTask};

/// Repository trait for Task persistence
///
/// This trait defines the data access interface for tasks.
/// Implementations can use different storage backends (MongoDB, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// Get a task by ID
    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>>;

    /// List every task, in store-native order
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Merge the given fields into an existing task.
    ///
    /// Returns `None` when no task matches the id; omitted fields are
    /// preserved.
    async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<Option<Task>>;

    /// Delete a task by ID. Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> TaskResult<bool>;
}
