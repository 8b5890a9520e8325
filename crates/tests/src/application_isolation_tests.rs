use axum::http::StatusCode;

use crate::common::{
    create_test_offer, get_authed, put_authed, register_company, register_student,
    submit_test_application, test_app,
};

#[tokio::test]
async fn other_company_cannot_list_offer_applications() {
    let (app, _pool, _guard) = test_app().await;

    let acme = register_company(&app, "hr@acme.fr", "Acme").await;
    let acme_token = acme["token"].as_str().unwrap();
    let offer = create_test_offer(&app, acme_token, "Acme offer").await;
    let offer_id = offer["id"].as_str().unwrap();

    let student = register_student(&app, "lina@example.com", "Lina").await;
    submit_test_application(&app, student["token"].as_str().unwrap(), offer_id).await;

    let globex = register_company(&app, "hr@globex.fr", "Globex").await;
    let globex_token = globex["token"].as_str().unwrap();

    let (status, _) = get_authed(
        &app,
        &format!("/api/applications/offers/{}", offer_id),
        globex_token,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn owning_company_lists_offer_applications() {
    let (app, _pool, _guard) = test_app().await;

    let acme = register_company(&app, "hr@acme.fr", "Acme").await;
    let acme_token = acme["token"].as_str().unwrap();
    let offer = create_test_offer(&app, acme_token, "Acme offer").await;
    let offer_id = offer["id"].as_str().unwrap();

    let student = register_student(&app, "lina@example.com", "Lina").await;
    submit_test_application(&app, student["token"].as_str().unwrap(), offer_id).await;

    let (status, resp) = get_authed(
        &app,
        &format!("/api/applications/offers/{}", offer_id),
        acme_token,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp.as_array().unwrap().len(), 1);
    assert_eq!(resp[0]["status"], "SUBMITTED");
}

#[tokio::test]
async fn student_cannot_list_another_students_applications() {
    let (app, _pool, _guard) = test_app().await;

    let lina = register_student(&app, "lina@example.com", "Lina").await;
    let marc = register_student(&app, "marc@example.com", "Marc").await;

    let lina_id = lina["userId"].as_str().unwrap();
    let marc_token = marc["token"].as_str().unwrap();

    let (status, _) = get_authed(
        &app,
        &format!("/api/applications/students/{}", lina_id),
        marc_token,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn student_lists_own_applications_with_offers() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let offer = create_test_offer(&app, company["token"].as_str().unwrap(), "Stage Rust").await;

    let student = register_student(&app, "lina@example.com", "Lina").await;
    let token = student["token"].as_str().unwrap();
    submit_test_application(&app, token, offer["id"].as_str().unwrap()).await;

    let student_id = student["userId"].as_str().unwrap();
    let (status, resp) = get_authed(
        &app,
        &format!("/api/applications/students/{}", student_id),
        token,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp.as_array().unwrap().len(), 1);
    // Each entry carries the application flattened alongside its offer.
    assert_eq!(resp[0]["status"], "SUBMITTED");
    assert_eq!(resp[0]["offer"]["title"], "Stage Rust");
    assert_eq!(resp[0]["offer"]["companyName"], "Acme");
}

#[tokio::test]
async fn admin_lists_any_students_applications() {
    let (app, pool, _guard) = test_app().await;

    let student = register_student(&app, "lina@example.com", "Lina").await;
    let student_id = student["userId"].as_str().unwrap();

    let admin_token = crate::common::create_admin(&pool, "root@jobbridge.fr").await;

    let (status, resp) = get_authed(
        &app,
        &format!("/api/applications/students/{}", student_id),
        &admin_token,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn application_visible_to_its_parties_only() {
    let (app, _pool, _guard) = test_app().await;

    let acme = register_company(&app, "hr@acme.fr", "Acme").await;
    let acme_token = acme["token"].as_str().unwrap();
    let offer = create_test_offer(&app, acme_token, "Acme offer").await;

    let lina = register_student(&app, "lina@example.com", "Lina").await;
    let lina_token = lina["token"].as_str().unwrap();
    let application =
        submit_test_application(&app, lina_token, offer["id"].as_str().unwrap()).await;
    let id = application["id"].as_str().unwrap();

    // Applicant and owning company see it.
    let (status, _) = get_authed(&app, &format!("/api/applications/{}", id), lina_token).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get_authed(&app, &format!("/api/applications/{}", id), acme_token).await;
    assert_eq!(status, StatusCode::OK);

    // A third party does not.
    let marc = register_student(&app, "marc@example.com", "Marc").await;
    let (status, _) = get_authed(
        &app,
        &format!("/api/applications/{}", id),
        marc["token"].as_str().unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn non_owning_company_cannot_move_application() {
    let (app, _pool, _guard) = test_app().await;

    let acme = register_company(&app, "hr@acme.fr", "Acme").await;
    let offer = create_test_offer(&app, acme["token"].as_str().unwrap(), "Acme offer").await;

    let student = register_student(&app, "lina@example.com", "Lina").await;
    let application = submit_test_application(
        &app,
        student["token"].as_str().unwrap(),
        offer["id"].as_str().unwrap(),
    )
    .await;
    let id = application["id"].as_str().unwrap();

    let globex = register_company(&app, "hr@globex.fr", "Globex").await;
    let globex_token = globex["token"].as_str().unwrap();

    let (status, _) = put_authed(
        &app,
        &format!("/api/applications/{}/status?status=UNDER_REVIEW", id),
        globex_token,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
