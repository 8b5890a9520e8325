use axum::http::StatusCode;

use crate::common::{
    create_test_offer, post_json, post_json_authed, register_company, register_student,
    submit_test_application, test_app,
};

#[tokio::test]
async fn student_submits_application() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let offer = create_test_offer(&app, company["token"].as_str().unwrap(), "Stage Rust").await;
    let offer_id = offer["id"].as_str().unwrap();

    let student = register_student(&app, "lina@example.com", "Lina").await;
    let application =
        submit_test_application(&app, student["token"].as_str().unwrap(), offer_id).await;

    assert_eq!(application["status"], "SUBMITTED");
    assert_eq!(application["offerId"], offer_id);
    assert_eq!(application["studentId"], student["userId"]);
    assert_eq!(application["cv"], "https://cdn.example/cv.pdf");
}

#[tokio::test]
async fn second_application_to_same_offer_409() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let offer = create_test_offer(&app, company["token"].as_str().unwrap(), "Stage Rust").await;
    let offer_id = offer["id"].as_str().unwrap();

    let student = register_student(&app, "lina@example.com", "Lina").await;
    let token = student["token"].as_str().unwrap();
    submit_test_application(&app, token, offer_id).await;

    let body = serde_json::json!({ "offerId": offer_id, "cv": "https://cdn.example/cv2.pdf" });
    let (status, resp) =
        post_json_authed(&app, "/api/applications", &body.to_string(), token).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(resp["message"].as_str().unwrap().contains("already applied"));
}

#[tokio::test]
async fn two_students_can_apply_to_same_offer() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let offer = create_test_offer(&app, company["token"].as_str().unwrap(), "Stage Rust").await;
    let offer_id = offer["id"].as_str().unwrap();

    let lina = register_student(&app, "lina@example.com", "Lina").await;
    let marc = register_student(&app, "marc@example.com", "Marc").await;

    submit_test_application(&app, lina["token"].as_str().unwrap(), offer_id).await;
    submit_test_application(&app, marc["token"].as_str().unwrap(), offer_id).await;
}

#[tokio::test]
async fn company_cannot_apply() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let token = company["token"].as_str().unwrap();
    let offer = create_test_offer(&app, token, "Stage Rust").await;

    let body = serde_json::json!({
        "offerId": offer["id"].as_str().unwrap(),
        "cv": "https://cdn.example/cv.pdf",
    });
    let (status, _) = post_json_authed(&app, "/api/applications", &body.to_string(), token).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_cannot_apply() {
    let (app, pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let offer = create_test_offer(&app, company["token"].as_str().unwrap(), "Stage Rust").await;

    // Admin authority does not extend to acting as a student: an
    // application row would carry the admin id as its student_id.
    let admin_token = crate::common::create_admin(&pool, "root@jobbridge.fr").await;

    let body = serde_json::json!({
        "offerId": offer["id"].as_str().unwrap(),
        "cv": "https://cdn.example/cv.pdf",
    });
    let (status, _) =
        post_json_authed(&app, "/api/applications", &body.to_string(), &admin_token).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unauthenticated_submit_401() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "offerId": uuid::Uuid::new_v4(),
        "cv": "https://cdn.example/cv.pdf",
    });
    let (status, _) = post_json(&app, "/api/applications", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_cv_422() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let offer = create_test_offer(&app, company["token"].as_str().unwrap(), "Stage Rust").await;

    let student = register_student(&app, "lina@example.com", "Lina").await;
    let token = student["token"].as_str().unwrap();

    let body = serde_json::json!({ "offerId": offer["id"].as_str().unwrap(), "cv": "" });
    let (status, resp) =
        post_json_authed(&app, "/api/applications", &body.to_string(), token).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["field_errors"]["cv"].as_str().is_some());
}

#[tokio::test]
async fn unknown_offer_404() {
    let (app, _pool, _guard) = test_app().await;

    let student = register_student(&app, "lina@example.com", "Lina").await;
    let token = student["token"].as_str().unwrap();

    let body = serde_json::json!({
        "offerId": uuid::Uuid::new_v4(),
        "cv": "https://cdn.example/cv.pdf",
    });
    let (status, _) = post_json_authed(&app, "/api/applications", &body.to_string(), token).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cover_letter_is_optional_and_preserved() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let offer = create_test_offer(&app, company["token"].as_str().unwrap(), "Stage Rust").await;

    let student = register_student(&app, "lina@example.com", "Lina").await;
    let token = student["token"].as_str().unwrap();

    let body = serde_json::json!({
        "offerId": offer["id"].as_str().unwrap(),
        "cv": "https://cdn.example/cv.pdf",
        "coverLetter": "https://cdn.example/letter.pdf",
    });
    let (status, resp) =
        post_json_authed(&app, "/api/applications", &body.to_string(), token).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp["coverLetter"], "https://cdn.example/letter.pdf");
}
