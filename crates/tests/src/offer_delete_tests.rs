use axum::http::StatusCode;

use crate::common::{
    create_test_offer, delete_authed, get, register_company, register_student,
    submit_test_application, test_app,
};

#[tokio::test]
async fn owner_deletes_offer_without_applications() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let token = company["token"].as_str().unwrap();
    let offer = create_test_offer(&app, token, "Ephemeral offer").await;
    let id = offer["id"].as_str().unwrap();

    let (status, _) = delete_authed(&app, &format!("/api/offers/{}", id), token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app, &format!("/api/offers/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_blocked_while_applications_exist() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let company_token = company["token"].as_str().unwrap();
    let offer = create_test_offer(&app, company_token, "Popular offer").await;
    let id = offer["id"].as_str().unwrap();

    let student = register_student(&app, "lina@example.com", "Lina").await;
    let student_token = student["token"].as_str().unwrap();
    submit_test_application(&app, student_token, id).await;

    let (status, resp) = delete_authed(&app, &format!("/api/offers/{}", id), company_token).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(resp["kind"], "Conflict");

    // The offer is still there.
    let (status, _) = get(&app, &format!("/api/offers/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn other_company_cannot_delete() {
    let (app, _pool, _guard) = test_app().await;

    let acme = register_company(&app, "hr@acme.fr", "Acme").await;
    let acme_token = acme["token"].as_str().unwrap();
    let offer = create_test_offer(&app, acme_token, "Acme offer").await;
    let id = offer["id"].as_str().unwrap();

    let globex = register_company(&app, "hr@globex.fr", "Globex").await;
    let globex_token = globex["token"].as_str().unwrap();

    let (status, _) = delete_authed(&app, &format!("/api/offers/{}", id), globex_token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn delete_unknown_offer_404() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let token = company["token"].as_str().unwrap();

    let fake_id = uuid::Uuid::new_v4();
    let (status, _) = delete_authed(&app, &format!("/api/offers/{}", fake_id), token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
