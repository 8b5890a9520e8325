use axum::http::StatusCode;

use crate::common::{
    get, get_authed, put_json_authed, register_company, register_student, test_app,
};

#[tokio::test]
async fn registration_seeds_student_profile() {
    let (app, _pool, _guard) = test_app().await;

    let student = register_student(&app, "lina@example.com", "Lina Moreau").await;
    let token = student["token"].as_str().unwrap();
    let id = student["userId"].as_str().unwrap();

    let (status, resp) = get_authed(&app, &format!("/api/users/students/{}", id), token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["fullName"], "Lina Moreau");
    assert_eq!(resp["address"], "");
    assert_eq!(resp["phone"], "");
}

#[tokio::test]
async fn profiles_require_authentication() {
    let (app, _pool, _guard) = test_app().await;

    let student = register_student(&app, "lina@example.com", "Lina").await;
    let id = student["userId"].as_str().unwrap();

    let (status, _) = get(&app, &format!("/api/users/students/{}", id)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn student_updates_own_profile() {
    let (app, _pool, _guard) = test_app().await;

    let student = register_student(&app, "lina@example.com", "Lina Moreau").await;
    let token = student["token"].as_str().unwrap();
    let id = student["userId"].as_str().unwrap();

    let body = serde_json::json!({
        "address": "12 rue de la Paix, Paris",
        "phone": "+33 6 12 34 56 78",
    });
    let (status, resp) = put_json_authed(
        &app,
        &format!("/api/users/students/{}", id),
        &body.to_string(),
        token,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["address"], "12 rue de la Paix, Paris");
    assert_eq!(resp["phone"], "+33 6 12 34 56 78");
    // Fields not in the request are untouched.
    assert_eq!(resp["fullName"], "Lina Moreau");
}

#[tokio::test]
async fn student_cannot_edit_another_profile() {
    let (app, _pool, _guard) = test_app().await;

    let lina = register_student(&app, "lina@example.com", "Lina").await;
    let marc = register_student(&app, "marc@example.com", "Marc").await;

    let lina_id = lina["userId"].as_str().unwrap();
    let marc_token = marc["token"].as_str().unwrap();

    let body = serde_json::json!({ "fullName": "Defaced" });
    let (status, _) = put_json_authed(
        &app,
        &format!("/api/users/students/{}", lina_id),
        &body.to_string(),
        marc_token,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn company_reads_student_profile() {
    let (app, _pool, _guard) = test_app().await;

    let student = register_student(&app, "lina@example.com", "Lina Moreau").await;
    let student_id = student["userId"].as_str().unwrap();

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let company_token = company["token"].as_str().unwrap();

    let (status, resp) = get_authed(
        &app,
        &format!("/api/users/students/{}", student_id),
        company_token,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["fullName"], "Lina Moreau");
}

#[tokio::test]
async fn company_updates_own_profile() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme Systems").await;
    let token = company["token"].as_str().unwrap();
    let id = company["userId"].as_str().unwrap();

    let body = serde_json::json!({
        "description": "Paiements pour le e-commerce",
        "website": "https://acme.example",
        "location": "Lyon, France",
        "contactEmail": "jobs@acme.example",
    });
    let (status, resp) = put_json_authed(
        &app,
        &format!("/api/users/companies/{}", id),
        &body.to_string(),
        token,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["companyName"], "Acme Systems");
    assert_eq!(resp["website"], "https://acme.example");
    assert_eq!(resp["contactEmail"], "jobs@acme.example");
}

#[tokio::test]
async fn company_cannot_edit_another_company() {
    let (app, _pool, _guard) = test_app().await;

    let acme = register_company(&app, "hr@acme.fr", "Acme").await;
    let globex = register_company(&app, "hr@globex.fr", "Globex").await;

    let acme_id = acme["userId"].as_str().unwrap();
    let globex_token = globex["token"].as_str().unwrap();

    let body = serde_json::json!({ "companyName": "Hostile Takeover" });
    let (status, _) = put_json_authed(
        &app,
        &format!("/api/users/companies/{}", acme_id),
        &body.to_string(),
        globex_token,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_student_profile_404() {
    let (app, _pool, _guard) = test_app().await;

    let student = register_student(&app, "lina@example.com", "Lina").await;
    let token = student["token"].as_str().unwrap();

    let fake_id = uuid::Uuid::new_v4();
    let (status, _) =
        get_authed(&app, &format!("/api/users/students/{}", fake_id), token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn company_id_is_not_a_student_profile() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let token = company["token"].as_str().unwrap();
    let id = company["userId"].as_str().unwrap();

    let (status, _) = get_authed(&app, &format!("/api/users/students/{}", id), token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
