use axum::http::StatusCode;

use crate::common::{create_test_offer, put_json_authed, register_company, test_app};

#[tokio::test]
async fn owner_updates_offer() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let token = company["token"].as_str().unwrap();
    let offer = create_test_offer(&app, token, "Original title").await;
    let id = offer["id"].as_str().unwrap();

    let body = serde_json::json!({ "title": "Updated title", "type": "alternance" });
    let (status, resp) =
        put_json_authed(&app, &format!("/api/offers/{}", id), &body.to_string(), token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["title"], "Updated title");
    assert_eq!(resp["type"], "alternance");
    // Untouched fields survive a partial update.
    assert_eq!(resp["location"], "Paris, France");
}

#[tokio::test]
async fn other_company_cannot_update() {
    let (app, _pool, _guard) = test_app().await;

    let acme = register_company(&app, "hr@acme.fr", "Acme").await;
    let acme_token = acme["token"].as_str().unwrap();
    let offer = create_test_offer(&app, acme_token, "Acme offer").await;
    let id = offer["id"].as_str().unwrap();

    let globex = register_company(&app, "hr@globex.fr", "Globex").await;
    let globex_token = globex["token"].as_str().unwrap();

    let body = serde_json::json!({ "title": "Hijacked" });
    let (status, resp) = put_json_authed(
        &app,
        &format!("/api/offers/{}", id),
        &body.to_string(),
        globex_token,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(resp["kind"], "Forbidden");
}

#[tokio::test]
async fn update_unknown_offer_404() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let token = company["token"].as_str().unwrap();

    let fake_id = uuid::Uuid::new_v4();
    let body = serde_json::json!({ "title": "Ghost" });
    let (status, _) = put_json_authed(
        &app,
        &format!("/api/offers/{}", fake_id),
        &body.to_string(),
        token,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_empty_title_422() {
    let (app, _pool, _guard) = test_app().await;

    let company = register_company(&app, "hr@acme.fr", "Acme").await;
    let token = company["token"].as_str().unwrap();
    let offer = create_test_offer(&app, token, "Valid title").await;
    let id = offer["id"].as_str().unwrap();

    let body = serde_json::json!({ "title": "" });
    let (status, _) =
        put_json_authed(&app, &format!("/api/offers/{}", id), &body.to_string(), token).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
