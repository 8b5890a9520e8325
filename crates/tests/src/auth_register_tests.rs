use axum::http::StatusCode;

use crate::common::{get_authed, post_json, register_company, register_student, test_app};

#[tokio::test]
async fn register_student_returns_token_and_role() {
    let (app, _pool, _guard) = test_app().await;

    let resp = register_student(&app, "lina@example.com", "Lina Moreau").await;

    assert_eq!(resp["role"], "STUDENT");
    assert!(resp["token"].as_str().unwrap().contains('.'));
    assert!(resp["userId"].as_str().is_some());
}

#[tokio::test]
async fn register_company_creates_profile() {
    let (app, _pool, _guard) = test_app().await;

    let resp = register_company(&app, "hr@acme.fr", "Acme Systems").await;
    let token = resp["token"].as_str().unwrap();
    let id = resp["userId"].as_str().unwrap();

    let (status, profile) =
        get_authed(&app, &format!("/api/users/companies/{}", id), token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["companyName"], "Acme Systems");
}

#[tokio::test]
async fn register_duplicate_email_409() {
    let (app, _pool, _guard) = test_app().await;

    register_student(&app, "dup@example.com", "First").await;

    let body = serde_json::json!({
        "email": "dup@example.com",
        "password": "password123",
        "role": "STUDENT",
        "fullName": "Second",
    });
    let (status, resp) = post_json(&app, "/api/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(resp["kind"], "Conflict");
}

#[tokio::test]
async fn register_student_without_full_name_422() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "email": "noname@example.com",
        "password": "password123",
        "role": "STUDENT",
    });
    let (status, resp) = post_json(&app, "/api/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["field_errors"]["fullName"].as_str().is_some());
}

#[tokio::test]
async fn register_company_without_company_name_422() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "email": "noname@corp.fr",
        "password": "password123",
        "role": "COMPANY",
    });
    let (status, resp) = post_json(&app, "/api/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["field_errors"]["companyName"].as_str().is_some());
}

#[tokio::test]
async fn register_admin_role_rejected() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "email": "boss@example.com",
        "password": "password123",
        "role": "ADMIN",
        "fullName": "The Boss",
    });
    let (status, resp) = post_json(&app, "/api/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["field_errors"]["role"].as_str().is_some());
}

#[tokio::test]
async fn register_short_password_422() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "email": "short@example.com",
        "password": "short",
        "role": "STUDENT",
        "fullName": "Short Password",
    });
    let (status, resp) = post_json(&app, "/api/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["field_errors"]["password"].as_str().is_some());
}

#[tokio::test]
async fn register_invalid_email_422() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "email": "not-an-email",
        "password": "password123",
        "role": "STUDENT",
        "fullName": "Bad Email",
    });
    let (status, _) = post_json(&app, "/api/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
