use axum::http::StatusCode;

use crate::common::{
    create_test_offer, post_json, post_json_authed, register_company, register_student, test_app,
};

#[tokio::test]
async fn company_creates_offer() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme Systems").await;
    let token = company["token"].as_str().unwrap();

    let offer = create_test_offer(&app, token, "Stage développeur Rust").await;

    assert_eq!(offer["title"], "Stage développeur Rust");
    assert_eq!(offer["companyId"], company["userId"]);
    // Display name comes from the company profile, not the request.
    assert_eq!(offer["companyName"], "Acme Systems");
    assert_eq!(offer["type"], "stage");
}

#[tokio::test]
async fn student_cannot_create_offer() {
    let (app, _pool, _guard) = test_app().await;

    let student = register_student(&app, "lina@example.com", "Lina Moreau").await;
    let token = student["token"].as_str().unwrap();

    let body = serde_json::json!({ "title": "Fake offer" });
    let (status, resp) = post_json_authed(&app, "/api/offers", &body.to_string(), token).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(resp["kind"], "Forbidden");
}

#[tokio::test]
async fn unauthenticated_create_401() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({ "title": "Anonymous offer" });
    let (status, _) = post_json(&app, "/api/offers", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_title_422() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let token = company["token"].as_str().unwrap();

    let body = serde_json::json!({ "title": "" });
    let (status, resp) = post_json_authed(&app, "/api/offers", &body.to_string(), token).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["field_errors"]["title"].as_str().is_some());
}

#[tokio::test]
async fn unknown_offer_type_422() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let token = company["token"].as_str().unwrap();

    let body = serde_json::json!({ "title": "CDI offer", "type": "cdi" });
    let (status, _) = post_json_authed(&app, "/api/offers", &body.to_string(), token).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn omitted_offer_type_defaults_to_stage() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let token = company["token"].as_str().unwrap();

    let body = serde_json::json!({ "title": "Default type offer" });
    let (status, resp) = post_json_authed(&app, "/api/offers", &body.to_string(), token).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp["type"], "stage");
}
