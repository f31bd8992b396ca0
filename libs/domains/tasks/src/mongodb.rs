//! MongoDB implementation of TaskRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;

/// MongoDB implementation of the TaskRepository
pub struct MongoTaskRepository {
    collection: Collection<Task>,
}

impl MongoTaskRepository {
    /// Create a new MongoTaskRepository
    ///
    /// # Arguments
    /// * `db` - MongoDB database instance
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("mydb");
    /// let repo = MongoTaskRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Task>("tasks");
        Self { collection }
    }

    /// Create a new MongoTaskRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Task>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Task> {
        &self.collection
    }

    /// Ensure the unique index on the task id exists.
    pub async fn create_indexes(&self) -> TaskResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }

    /// Build the lookup filter for a task id
    fn id_filter(id: Uuid) -> Document {
        doc! { "id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl TaskRepository for MongoTaskRepository {
    #[instrument(skip(self, input), fields(task_name = %input.name))]
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let task = Task::new(input);

        self.collection.insert_one(&task).await?;

        tracing::info!(task_id = %task.id, "Task created successfully");
        Ok(task)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let task = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(task)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> TaskResult<Vec<Task>> {
        use futures_util::TryStreamExt;

        // No sort options: store-native order
        let cursor = self.collection.find(doc! {}).await?;
        let tasks: Vec<Task> = cursor.try_collect().await?;

        Ok(tasks)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<Option<Task>> {
        let filter = Self::id_filter(id);

        // A miss is a normal outcome here, not an error
        let Some(existing) = self.collection.find_one(filter.clone()).await? else {
            return Ok(None);
        };

        let mut updated = existing;
        updated.apply_update(input);

        // Replace the merged document wholesale
        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(task_id = %id, "Task updated successfully");
        Ok(Some(updated))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> TaskResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count > 0 {
            tracing::info!(task_id = %id, "Task deleted successfully");
        }

        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_filter_uses_id_field() {
        let id = Uuid::now_v7();
        let filter = MongoTaskRepository::id_filter(id);
        assert!(filter.contains_key("id"));
        assert_eq!(filter.get_str("id").unwrap(), id.to_string());
    }
}
