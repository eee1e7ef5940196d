mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_and_look_up_tasks() -> Result<()> {
    let app = common::TestApp::new().await?;
    let manager = app.signup("manager", "EMPLOYEE").await?;
    let worker = app.signup("worker", "EMPLOYEE").await?;

    let (status, task) = app
        .post(
            &format!("/employee/tasks?createdById={}&assignedToId={}", manager, worker),
            json!({ "title": "Inventory", "description": "Count stock", "priority": "HIGH", "dueDate": "2024-06-01T09:00:00" }),
        )
        .await?;
    assert_eq!(status, StatusCode::OK, "{}", task);
    assert_eq!(task["status"], "PENDING");
    assert_eq!(task["createdById"], manager);
    assert_eq!(task["assignedToId"], worker);
    assert_eq!(task["dueDate"], "2024-06-01T09:00:00");

    let id = task["id"].as_i64().unwrap_or_default();
    let (status, fetched) = app.get(&format!("/employee/tasks/{}", id)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Inventory");

    let (_, assigned) = app.get(&format!("/employee/tasks/assigned/{}", worker)).await?;
    assert_eq!(assigned.as_array().map(Vec::len), Some(1));

    let (_, created) = app.get(&format!("/employee/tasks/created/{}", manager)).await?;
    assert_eq!(created.as_array().map(Vec::len), Some(1));

    let (_, none) = app.get(&format!("/employee/tasks/created/{}", worker)).await?;
    assert_eq!(none.as_array().map(Vec::len), Some(0));

    let (_, all) = app.get("/employee/tasks").await?;
    assert_eq!(all.as_array().map(Vec::len), Some(1));

    Ok(())
}

#[tokio::test]
async fn update_keeps_fields_left_out() -> Result<()> {
    let app = common::TestApp::new().await?;
    let user = app.signup("solo", "EMPLOYEE").await?;

    let (_, task) = app
        .post(
            &format!("/employee/tasks?createdById={0}&assignedToId={0}", user),
            json!({ "title": "Report", "description": "Quarterly" }),
        )
        .await?;
    let id = task["id"].as_i64().unwrap_or_default();

    let (status, updated) = app
        .put(&format!("/employee/tasks/{}", id), json!({ "status": "COMPLETED" }))
        .await?;
    assert_eq!(status, StatusCode::OK, "{}", updated);
    assert_eq!(updated["status"], "COMPLETED");
    assert_eq!(updated["title"], "Report");
    assert_eq!(updated["description"], "Quarterly");

    let (_, completed) = app.get("/employee/tasks/status/COMPLETED").await?;
    assert_eq!(completed.as_array().map(Vec::len), Some(1));
    let (_, pending) = app.get("/employee/tasks/status/PENDING").await?;
    assert_eq!(pending.as_array().map(Vec::len), Some(0));

    Ok(())
}

#[tokio::test]
async fn missing_tasks_and_users_are_not_found() -> Result<()> {
    let app = common::TestApp::new().await?;
    let user = app.signup("lonely", "EMPLOYEE").await?;

    let (status, body) = app.get("/employee/tasks/42").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = app.put("/employee/tasks/42", json!({ "title": "x" })).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post(
            &format!("/employee/tasks?createdById={}&assignedToId=999", user),
            json!({ "title": "Orphan" }),
        )
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post(&format!("/employee/tasks?createdById={}", user), json!({ "title": "Half" }))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, all) = app.get("/employee/tasks").await?;
    assert_eq!(all.as_array().map(Vec::len), Some(0));

    Ok(())
}
