use serde_json::json;
use taskflow_core::{
    ApiError, CreateTaskRequest, TaskApi, TaskDataError, TaskPriority, TaskStatus,
    UpdateTaskRequest,
};
use taskflow_rest_client::{TaskServiceClient, TaskServiceClientBuilder};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn task_json(id: &str, status: &str, priority: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Task {id}"),
        "description": null,
        "status": status,
        "priority": priority,
        "created_by": "user-1",
        "created_at": "2025-03-04T10:00:00Z"
    })
}

async fn client_for(server: &MockServer) -> TaskServiceClient {
    TaskServiceClientBuilder::new(server.uri())
        .bearer_token("validtoken")
        .build()
        .unwrap()
}

#[tokio::test]
async fn lists_tasks_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tasks"))
        .and(header("Authorization", "Bearer validtoken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [
                task_json("t1", "pending", "high"),
                task_json("t2", "completed", "low"),
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = client_for(&server).await.list_tasks().await.unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, "t1");
    assert_eq!(tasks[0].priority, TaskPriority::High);
    assert_eq!(tasks[1].status, TaskStatus::Completed);
}

#[tokio::test]
async fn unknown_status_surfaces_as_data_integrity_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [task_json("t1", "archived", "high")]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).await.list_tasks().await.unwrap_err();

    assert_eq!(
        err,
        ApiError::DataIntegrity(TaskDataError::UnknownStatus {
            task_id: "t1".to_string(),
            value: "archived".to_string(),
        })
    );
}

#[tokio::test]
async fn creates_task() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/tasks"))
        .and(body_json(json!({ "title": "Ship release", "priority": "high" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "new",
            "title": "Ship release",
            "status": "pending",
            "priority": "high",
            "created_by": "user-1",
            "created_at": "2025-03-04T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let task = client_for(&server)
        .await
        .create_task(&CreateTaskRequest {
            title: "Ship release".to_string(),
            description: None,
            priority: Some(TaskPriority::High),
        })
        .await
        .unwrap();

    assert_eq!(task.id, "new");
    assert_eq!(task.title, "Ship release");
    assert_eq!(task.description, None);
}

#[tokio::test]
async fn updates_status_only() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/tasks/t1"))
        .and(body_json(json!({ "status": "in_progress" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(task_json("t1", "in_progress", "medium")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let task = client_for(&server)
        .await
        .update_task("t1", &UpdateTaskRequest::status(TaskStatus::InProgress))
        .await
        .unwrap();

    assert_eq!(task.status, TaskStatus::InProgress);
}

#[tokio::test]
async fn forbidden_delete_maps_to_forbidden() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/tasks/t9"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "error": "Insufficient permissions" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).await.delete_task("t9").await.unwrap_err();

    assert_eq!(err, ApiError::Forbidden("Insufficient permissions".to_string()));
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/tasks/t1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).await.delete_task("t1").await.unwrap();
}

#[tokio::test]
async fn custom_base_path_is_honoured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tasks": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TaskServiceClientBuilder::new(format!("{}/", server.uri()))
        .base_path("/v2/")
        .build()
        .unwrap();

    assert!(client.bearer_token().is_none());
    assert!(client.list_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.list_tasks().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
