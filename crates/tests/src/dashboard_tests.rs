use axum::http::StatusCode;

use crate::common::{
    create_test_offer, get_authed, put_authed, register_company, register_student,
    submit_test_application, test_app,
};

#[tokio::test]
async fn company_stats_start_at_zero() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let token = company["token"].as_str().unwrap();

    let (status, resp) = get_authed(&app, "/api/dashboard/company/stats", token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["totalOffers"], 0);
    assert_eq!(resp["totalApplications"], 0);
    // Every status is present even with nothing counted.
    let breakdown = resp["applicationsByStatus"].as_object().unwrap();
    assert_eq!(breakdown.len(), 6);
    assert_eq!(breakdown["SUBMITTED"], 0);
    assert_eq!(breakdown["WITHDRAWN"], 0);
}

#[tokio::test]
async fn company_stats_count_offers_and_applications() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let token = company["token"].as_str().unwrap();
    let offer = create_test_offer(&app, token, "Stage Rust").await;
    create_test_offer(&app, token, "Stage SQL").await;

    let lina = register_student(&app, "lina@example.com", "Lina").await;
    let marc = register_student(&app, "marc@example.com", "Marc").await;
    let offer_id = offer["id"].as_str().unwrap();
    let lina_app = submit_test_application(&app, lina["token"].as_str().unwrap(), offer_id).await;
    submit_test_application(&app, marc["token"].as_str().unwrap(), offer_id).await;

    // Move one along so the breakdown has two buckets.
    put_authed(
        &app,
        &format!(
            "/api/applications/{}/status?status=UNDER_REVIEW",
            lina_app["id"].as_str().unwrap()
        ),
        token,
    )
    .await;

    let (status, resp) = get_authed(&app, "/api/dashboard/company/stats", token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["totalOffers"], 2);
    assert_eq!(resp["totalApplications"], 2);
    let breakdown = resp["applicationsByStatus"].as_object().unwrap();
    assert_eq!(breakdown["SUBMITTED"], 1);
    assert_eq!(breakdown["UNDER_REVIEW"], 1);
    assert_eq!(breakdown["ACCEPTED"], 0);
}

#[tokio::test]
async fn company_stats_exclude_other_companies() {
    let (app, _pool, _guard) = test_app().await;

    let acme = register_company(&app, "hr@acme.fr", "Acme").await;
    let acme_token = acme["token"].as_str().unwrap();
    create_test_offer(&app, acme_token, "Acme offer").await;

    let globex = register_company(&app, "hr@globex.fr", "Globex").await;
    let globex_token = globex["token"].as_str().unwrap();

    let (status, resp) = get_authed(&app, "/api/dashboard/company/stats", globex_token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["totalOffers"], 0);
}

#[tokio::test]
async fn company_stats_require_company_role() {
    let (app, _pool, _guard) = test_app().await;

    let student = register_student(&app, "lina@example.com", "Lina").await;
    let token = student["token"].as_str().unwrap();

    let (status, _) = get_authed(&app, "/api/dashboard/company/stats", token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_statistics_count_platform_totals() {
    let (app, pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let company_token = company["token"].as_str().unwrap();
    let offer = create_test_offer(&app, company_token, "Stage Rust").await;

    let student = register_student(&app, "lina@example.com", "Lina").await;
    submit_test_application(
        &app,
        student["token"].as_str().unwrap(),
        offer["id"].as_str().unwrap(),
    )
    .await;
    register_student(&app, "marc@example.com", "Marc").await;

    let admin_token = crate::common::create_admin(&pool, "root@jobbridge.fr").await;
    let (status, resp) = get_authed(&app, "/api/admin/statistics", &admin_token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["totalStudents"], 2);
    assert_eq!(resp["totalCompanies"], 1);
    assert_eq!(resp["totalOffers"], 1);
    assert_eq!(resp["totalApplications"], 1);
}

#[tokio::test]
async fn admin_statistics_forbidden_for_company() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let token = company["token"].as_str().unwrap();

    let (status, _) = get_authed(&app, "/api/admin/statistics", token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn recent_applications_join_names() {
    let (app, pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme Systems").await;
    let offer = create_test_offer(&app, company["token"].as_str().unwrap(), "Stage Rust").await;

    let student = register_student(&app, "lina@example.com", "Lina Moreau").await;
    submit_test_application(
        &app,
        student["token"].as_str().unwrap(),
        offer["id"].as_str().unwrap(),
    )
    .await;

    let admin_token = crate::common::create_admin(&pool, "root@jobbridge.fr").await;
    let (status, resp) = get_authed(&app, "/api/admin/recent-applications", &admin_token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp.as_array().unwrap().len(), 1);
    assert_eq!(resp[0]["studentName"], "Lina Moreau");
    assert_eq!(resp[0]["offerTitle"], "Stage Rust");
    assert_eq!(resp[0]["companyName"], "Acme Systems");
    assert_eq!(resp[0]["status"], "SUBMITTED");
}

#[tokio::test]
async fn recent_applications_newest_first() {
    let (app, pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let token = company["token"].as_str().unwrap();
    let first = create_test_offer(&app, token, "First offer").await;
    let second = create_test_offer(&app, token, "Second offer").await;

    let student = register_student(&app, "lina@example.com", "Lina").await;
    let student_token = student["token"].as_str().unwrap();
    submit_test_application(&app, student_token, first["id"].as_str().unwrap()).await;
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    submit_test_application(&app, student_token, second["id"].as_str().unwrap()).await;

    let admin_token = crate::common::create_admin(&pool, "root@jobbridge.fr").await;
    let (status, resp) = get_authed(&app, "/api/admin/recent-applications", &admin_token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp[0]["offerTitle"], "Second offer");
    assert_eq!(resp[1]["offerTitle"], "First offer");
}
