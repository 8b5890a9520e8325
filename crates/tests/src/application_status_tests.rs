use axum::http::StatusCode;

use crate::common::{
    create_test_offer, put_authed, register_company, register_student, submit_test_application,
    test_app,
};

/// Register a company with one offer, a student with one application on
/// it, and return (company_token, student_token, application_id).
async fn seed_application(app: &axum::Router) -> (String, String, String) {
    let company = register_company(app, "hr@acme.fr", "Acme").await;
    let company_token = company["token"].as_str().unwrap().to_string();
    let offer = create_test_offer(app, &company_token, "Stage Rust").await;

    let student = register_student(app, "lina@example.com", "Lina").await;
    let student_token = student["token"].as_str().unwrap().to_string();
    let application =
        submit_test_application(app, &student_token, offer["id"].as_str().unwrap()).await;

    let id = application["id"].as_str().unwrap().to_string();
    (company_token, student_token, id)
}

fn status_uri(id: &str, status: &str) -> String {
    format!("/api/applications/{}/status?status={}", id, status)
}

#[tokio::test]
async fn company_walks_the_full_workflow() {
    let (app, _pool, _guard) = test_app().await;
    let (company_token, _, id) = seed_application(&app).await;

    for target in ["UNDER_REVIEW", "INTERVIEW_SCHEDULED", "ACCEPTED"] {
        let (status, resp) = put_authed(&app, &status_uri(&id, target), &company_token).await;
        assert_eq!(status, StatusCode::OK, "Failed moving to {}", target);
        assert_eq!(resp["status"], target);
    }
}

#[tokio::test]
async fn company_may_skip_forward() {
    let (app, _pool, _guard) = test_app().await;
    let (company_token, _, id) = seed_application(&app).await;

    // SUBMITTED → ACCEPTED without the intermediate states.
    let (status, resp) = put_authed(&app, &status_uri(&id, "ACCEPTED"), &company_token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "ACCEPTED");
}

#[tokio::test]
async fn backward_transition_409() {
    let (app, _pool, _guard) = test_app().await;
    let (company_token, _, id) = seed_application(&app).await;

    put_authed(&app, &status_uri(&id, "UNDER_REVIEW"), &company_token).await;

    let (status, resp) = put_authed(&app, &status_uri(&id, "SUBMITTED"), &company_token).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let message = resp["message"].as_str().unwrap();
    assert!(message.contains("UNDER_REVIEW") && message.contains("SUBMITTED"));
}

#[tokio::test]
async fn terminal_status_admits_no_moves() {
    let (app, _pool, _guard) = test_app().await;
    let (company_token, _, id) = seed_application(&app).await;

    put_authed(&app, &status_uri(&id, "REJECTED"), &company_token).await;

    for target in ["SUBMITTED", "UNDER_REVIEW", "ACCEPTED", "WITHDRAWN"] {
        let (status, _) = put_authed(&app, &status_uri(&id, target), &company_token).await;
        assert_eq!(status, StatusCode::CONFLICT, "REJECTED should refuse {}", target);
    }
}

#[tokio::test]
async fn re_requesting_current_status_is_a_noop() {
    let (app, _pool, _guard) = test_app().await;
    let (company_token, _, id) = seed_application(&app).await;

    let (status, first) = put_authed(&app, &status_uri(&id, "UNDER_REVIEW"), &company_token).await;
    assert_eq!(status, StatusCode::OK);
    let updated_at = first["updatedAt"].as_str().unwrap().to_string();

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let (status, second) = put_authed(&app, &status_uri(&id, "UNDER_REVIEW"), &company_token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["status"], "UNDER_REVIEW");
    // The row was not touched, so the timestamp did not move.
    assert_eq!(second["updatedAt"].as_str().unwrap(), updated_at);
}

#[tokio::test]
async fn real_transition_bumps_updated_at() {
    let (app, _pool, _guard) = test_app().await;
    let (company_token, _, id) = seed_application(&app).await;

    let (_, first) = put_authed(&app, &status_uri(&id, "UNDER_REVIEW"), &company_token).await;
    let updated_at = first["updatedAt"].as_str().unwrap().to_string();

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let (status, second) =
        put_authed(&app, &status_uri(&id, "INTERVIEW_SCHEDULED"), &company_token).await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(second["updatedAt"].as_str().unwrap(), updated_at);
}

#[tokio::test]
async fn unknown_status_value_400() {
    let (app, _pool, _guard) = test_app().await;
    let (company_token, _, id) = seed_application(&app).await;

    let (status, resp) = put_authed(&app, &status_uri(&id, "PENDING"), &company_token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["message"].as_str().unwrap().contains("PENDING"));
}

#[tokio::test]
async fn lowercase_status_value_400() {
    let (app, _pool, _guard) = test_app().await;
    let (company_token, _, id) = seed_application(&app).await;

    let (status, _) = put_authed(&app, &status_uri(&id, "accepted"), &company_token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn student_withdraws_own_application() {
    let (app, _pool, _guard) = test_app().await;
    let (_, student_token, id) = seed_application(&app).await;

    let (status, resp) = put_authed(&app, &status_uri(&id, "WITHDRAWN"), &student_token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "WITHDRAWN");
}

#[tokio::test]
async fn student_may_withdraw_mid_review() {
    let (app, _pool, _guard) = test_app().await;
    let (company_token, student_token, id) = seed_application(&app).await;

    put_authed(&app, &status_uri(&id, "INTERVIEW_SCHEDULED"), &company_token).await;

    let (status, resp) = put_authed(&app, &status_uri(&id, "WITHDRAWN"), &student_token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "WITHDRAWN");
}

#[tokio::test]
async fn student_cannot_take_review_transitions() {
    let (app, _pool, _guard) = test_app().await;
    let (_, student_token, id) = seed_application(&app).await;

    for target in ["UNDER_REVIEW", "INTERVIEW_SCHEDULED", "ACCEPTED", "REJECTED"] {
        let (status, _) = put_authed(&app, &status_uri(&id, target), &student_token).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "Student should not reach {}", target);
    }
}

#[tokio::test]
async fn another_student_cannot_withdraw() {
    let (app, _pool, _guard) = test_app().await;
    let (_, _, id) = seed_application(&app).await;

    let other = register_student(&app, "marc@example.com", "Marc").await;
    let other_token = other["token"].as_str().unwrap();

    let (status, _) = put_authed(&app, &status_uri(&id, "WITHDRAWN"), other_token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_may_take_any_legal_transition() {
    let (app, pool, _guard) = test_app().await;
    let (_, _, id) = seed_application(&app).await;

    let admin_token = crate::common::create_admin(&pool, "root@jobbridge.fr").await;

    let (status, resp) = put_authed(&app, &status_uri(&id, "UNDER_REVIEW"), &admin_token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "UNDER_REVIEW");
}

#[tokio::test]
async fn unknown_application_404() {
    let (app, _pool, _guard) = test_app().await;
    let (company_token, _, _) = seed_application(&app).await;

    let fake_id = uuid::Uuid::new_v4().to_string();
    let (status, _) =
        put_authed(&app, &status_uri(&fake_id, "UNDER_REVIEW"), &company_token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_application_uuid_400() {
    let (app, _pool, _guard) = test_app().await;
    let (company_token, _, _) = seed_application(&app).await;

    let (status, _) =
        put_authed(&app, &status_uri("not-a-uuid", "UNDER_REVIEW"), &company_token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
