use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, InternalServerErrorResponse, NotFoundResponse,
    },
    UuidPath,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task, TaskPriority, TaskStatus, UpdateTask};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// OpenAPI documentation for the Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, create_task, get_task, update_task, delete_task),
    components(
        schemas(Task, TaskStatus, TaskPriority, CreateTask, UpdateTask),
        responses(
            NotFoundResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Tasks", description = "Task tracking endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the tasks router with all HTTP endpoints
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route(
            "/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(shared_service)
}

/// List every task
#[utoipa::path(
    get,
    path = "",
    tag = "Tasks",
    responses(
        (status = 200, description = "All tasks, in store-native order", body = Vec<Task>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
) -> TaskResult<Json<Vec<Task>>> {
    let tasks = service.list_tasks().await?;
    Ok(Json(tasks))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = "Tasks",
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created successfully", body = Task),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Json(input): Json<CreateTask>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    UuidPath(id): UuidPath,
) -> TaskResult<Json<Task>> {
    let task = service.get_task(id).await?;
    Ok(Json(task))
}

/// Update a task.
///
/// Omitted body fields are preserved. A miss is a normal response: the body
/// is JSON `null`, not a 404.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Updated task, or null when no task matches", body = Task),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    UuidPath(id): UuidPath,
    Json(input): Json<UpdateTask>,
) -> TaskResult<Json<Option<Task>>> {
    let task = service.update_task(id, input).await?;
    Ok(Json(task))
}

/// Delete a task.
///
/// Responds 204 whether or not a matching task existed.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted (or was already absent)"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    UuidPath(id): UuidPath,
) -> TaskResult<impl IntoResponse> {
    service.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTaskRepository;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt; // For oneshot()
    use uuid::Uuid;

    // Helper to parse JSON response body
    async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn app(repo: MockTaskRepository) -> Router {
        router(TaskService::new(repo))
    }

    #[tokio::test]
    async fn test_create_task_returns_201_with_defaults() {
        let mut repo = MockTaskRepository::new();
        repo.expect_create()
            .returning(|input| Ok(Task::new(input)));

        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_string(&json!({ "name": "Buy milk" })).unwrap(),
            ))
            .unwrap();

        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let task: Task = json_body(response.into_body()).await;
        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.status, TaskStatus::Active);
        assert_eq!(task.priority, TaskPriority::Medium);
    }

    #[tokio::test]
    async fn test_list_tasks_returns_200() {
        let mut repo = MockTaskRepository::new();
        repo.expect_list().returning(|| {
            Ok(vec![Task::new(CreateTask {
                name: "only".to_string(),
                status: TaskStatus::Active,
                priority: TaskPriority::Medium,
                due_date: None,
            })])
        });

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let tasks: Vec<Task> = json_body(response.into_body()).await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "only");
    }

    #[tokio::test]
    async fn test_get_missing_task_returns_404() {
        let mut repo = MockTaskRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let uri = format!("/{}", Uuid::now_v7());
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_task_merges_and_returns_record() {
        let mut repo = MockTaskRepository::new();
        repo.expect_update().returning(|id, input| {
            let mut task = Task::new(CreateTask {
                name: "before".to_string(),
                status: TaskStatus::Active,
                priority: TaskPriority::Medium,
                due_date: None,
            });
            task.id = id;
            task.apply_update(input);
            Ok(Some(task))
        });

        let id = Uuid::now_v7();
        let request = Request::builder()
            .method("PUT")
            .uri(format!("/{}", id))
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_string(&json!({ "name": "after" })).unwrap(),
            ))
            .unwrap();

        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let task: Task = json_body(response.into_body()).await;
        assert_eq!(task.id, id);
        assert_eq!(task.name, "after");
        assert_eq!(task.status, TaskStatus::Active);
    }

    #[tokio::test]
    async fn test_update_missing_task_returns_null_not_404() {
        let mut repo = MockTaskRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let request = Request::builder()
            .method("PUT")
            .uri(format!("/{}", Uuid::now_v7()))
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_string(&json!({ "status": "completed" })).unwrap(),
            ))
            .unwrap();

        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"null");
    }

    #[tokio::test]
    async fn test_delete_returns_204_even_without_match() {
        let mut repo = MockTaskRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/{}", Uuid::now_v7()))
            .body(Body::empty())
            .unwrap();

        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_invalid_uuid_returns_400() {
        let repo = MockTaskRepository::new();

        let request = Request::builder()
            .method("DELETE")
            .uri("/not-a-uuid")
            .body(Body::empty())
            .unwrap();

        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
