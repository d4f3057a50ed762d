
use fixtures::{client, signed_in_client, task_json, TOKEN};
use serde_json::json;
use task_api::tasks::{add_task, load_tasks, CREATE_FAILED, FETCH_FAILED};
use task_api::{ApiError, Task, TaskDraft, TaskList, TaskLoad};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn task(id: i64, title: &str) -> Task {
    serde_json::from_value(task_json(id, title, "")).unwrap()
}

#[tokio::test]
async fn test_requests_carry_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            task_json(1, "First", "one"),
            task_json(2, "Second", "two"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = signed_in_client(&server).list_tasks().await.unwrap();

    let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_requests_without_session_are_unauthenticated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .and(|req: &Request| !req.headers.contains_key("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = client(&server).list_tasks().await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_load_tasks_unauthorized_requires_login() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Token expired" })))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(load_tasks(&signed_in_client(&server)).await, TaskLoad::LoginRequired);
}

#[tokio::test]
async fn test_load_tasks_server_error_uses_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "db down" })))
        .mount(&server)
        .await;

    assert_eq!(
        load_tasks(&signed_in_client(&server)).await,
        TaskLoad::Failed(FETCH_FAILED.to_string())
    );
}

#[tokio::test]
async fn test_load_tasks_malformed_body_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = signed_in_client(&server);
    assert!(matches!(client.list_tasks().await, Err(ApiError::Decode(_))));
    assert_eq!(load_tasks(&client).await, TaskLoad::Failed(FETCH_FAILED.to_string()));
}

#[tokio::test]
async fn test_add_task_appends_and_clears_draft() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(body_json(json!({ "title": "Buy milk", "description": "" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Task created",
            "task": task_json(3, "Buy milk", "")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in_client(&server);
    let mut list = TaskList::new(vec![]);
    let mut draft = TaskDraft::new("Buy milk", "");

    let created = add_task(&client, &draft).await.unwrap().unwrap();
    assert_eq!(created.message, "Task created");
    list.append(created.task);
    draft.clear();

    assert_eq!(list.len(), 1);
    assert_eq!(list.tasks()[0].title, "Buy milk");
    assert_eq!(list.tasks()[0].id, 3);
    assert_eq!(draft, TaskDraft::default());
}

#[tokio::test]
async fn test_add_task_blank_title_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = signed_in_client(&server);
    let list = TaskList::new(vec![]);

    let outcome = add_task(&client, &TaskDraft::new("   ", "details")).await.unwrap();

    assert!(outcome.is_none());
    assert!(list.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_task_failure_surfaces_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": "Title is required" })))
        .mount(&server)
        .await;

    let err = add_task(&signed_in_client(&server), &TaskDraft::new("x", ""))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(CREATE_FAILED), "Title is required");
}

#[tokio::test]
async fn test_delete_removes_only_matching_task() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in_client(&server);
    let mut list = TaskList::new(vec![task(1, "a"), task(2, "b"), task(3, "c")]);

    client.delete_task(2).await.unwrap();
    assert!(list.remove(2));

    let ids: Vec<i64> = list.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_delete_missing_task_is_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Task not found" })))
        .mount(&server)
        .await;

    let err = signed_in_client(&server).delete_task(99).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
    assert_eq!(err.server_message(), Some("Task not found"));
}

#[tokio::test]
async fn test_update_task_returns_updated_task() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/tasks/5"))
        .and(body_json(json!({ "title": "Renamed", "description": "new" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(5, "Renamed", "new")))
        .expect(1)
        .mount(&server)
        .await;

    let task = signed_in_client(&server)
        .update_task(5, "Renamed", "new")
        .await
        .unwrap();
    assert_eq!(task.title, "Renamed");
    assert_eq!(task.description, "new");
}
