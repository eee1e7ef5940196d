mod common;

use std::collections::HashSet;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use ems_api::services::bootstrap::ensure_admin;

#[tokio::test]
async fn signup_login_and_wrong_password() -> Result<()> {
    let app = common::TestApp::new().await?;

    let (status, signup) = app
        .post(
            "/auth/signup",
            json!({ "username": "bob", "password": "pw1", "name": "Bob", "email": "bob@example.com", "role": "EMPLOYEE" }),
        )
        .await?;
    assert_eq!(status, StatusCode::OK, "{}", signup);
    assert_eq!(signup["status"], "success");
    assert_eq!(signup["message"], "User registered successfully");
    assert_eq!(signup["username"], "bob");
    assert_eq!(signup["role"], "EMPLOYEE");
    assert!(signup["token"].as_str().is_some_and(|t| !t.is_empty()));

    let (status, login) = app
        .post("/auth/login", json!({ "username": "bob", "password": "pw1" }))
        .await?;
    assert_eq!(status, StatusCode::OK, "{}", login);
    assert_eq!(login["message"], "Login successful");
    assert_eq!(login["role"], "EMPLOYEE");
    assert_eq!(login["userId"], signup["userId"]);

    let (status, body) = app
        .post("/auth/login", json!({ "username": "bob", "password": "wrong" }))
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert_eq!(body["message"], "Invalid username or password");

    Ok(())
}

#[tokio::test]
async fn duplicate_signup_conflicts() -> Result<()> {
    let app = common::TestApp::new().await?;
    app.signup("carol", "CUSTOMER").await?;

    let (status, body) = app
        .post(
            "/auth/signup",
            json!({ "username": "carol", "password": "other", "role": "ADMIN" }),
        )
        .await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Username already exists");

    let (status, users) = app.get("/users").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users.as_array().map(Vec::len), Some(1));
    assert_eq!(users[0]["role"], "CUSTOMER");

    Ok(())
}

#[tokio::test]
async fn unknown_user_cannot_log_in() -> Result<()> {
    let app = common::TestApp::new().await?;

    let (status, body) = app
        .post("/auth/login", json!({ "username": "ghost", "password": "x" }))
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid username or password");

    Ok(())
}

#[tokio::test]
async fn every_response_carries_a_new_token() -> Result<()> {
    let app = common::TestApp::new().await?;
    app.signup("dana", "EMPLOYEE").await?;

    let mut tokens = HashSet::new();
    for _ in 0..10 {
        let (status, body) = app
            .post("/auth/login", json!({ "username": "dana", "password": "dana-pw" }))
            .await?;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap_or_default().to_string();
        assert!(tokens.insert(token), "token reused");
    }

    Ok(())
}

#[tokio::test]
async fn bootstrap_seeds_admin_once() -> Result<()> {
    let app = common::TestApp::new().await?;

    assert!(ensure_admin(&app.pool).await?);
    assert!(!ensure_admin(&app.pool).await?);

    let (status, admins) = app.get("/users/role/ADMIN").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(admins.as_array().map(Vec::len), Some(1));
    assert_eq!(admins[0]["username"], "admin");
    assert_eq!(admins[0]["email"], "admin@example.com");

    let (status, login) = app
        .post("/auth/login", json!({ "username": "admin", "password": "admin123" }))
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["role"], "ADMIN");

    Ok(())
}

#[tokio::test]
async fn profiles_never_expose_passwords() -> Result<()> {
    let app = common::TestApp::new().await?;
    let id = app.signup("erin", "EMPLOYEE").await?;

    let (status, user) = app.get(&format!("/users/{}", id)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["username"], "erin");
    assert!(user.get("password").is_none(), "{}", user);

    let (status, _) = app.get("/users/999").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn malformed_requests_answer_bad_request_json() -> Result<()> {
    let app = common::TestApp::new().await?;

    let (status, body) = app
        .post("/auth/signup", json!({ "username": "x", "password": "y" }))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].as_str().is_some_and(|m| m.contains("role")), "{}", body);

    let (status, body) = app.get("/users/not-a-number").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, body) = app
        .post("/customer/appointments?customerId=abc&employeeId=1", json!({}))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let customer = app.signup("cust", "CUSTOMER").await?;
    let employee = app.signup("emp", "EMPLOYEE").await?;
    let (status, body) = app
        .post(
            &format!("/customer/appointments?customerId={}&employeeId={}", customer, employee),
            json!({ "appointmentDate": "2024-05-01T10:00:00Z" }),
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    Ok(())
}

#[tokio::test]
async fn users_are_found_by_email() -> Result<()> {
    let app = common::TestApp::new().await?;
    let id = app.signup("fay", "CUSTOMER").await?;

    let (status, user) = app.get("/users/email/fay@example.com").await?;
    assert_eq!(status, StatusCode::OK, "{}", user);
    assert_eq!(user["id"], id);

    let (status, body) = app.get("/users/email/nobody@example.com").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found with email: nobody@example.com");

    Ok(())
}
