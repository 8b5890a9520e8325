pub mod application;
pub mod auth;
pub mod dashboard;
pub mod offer;
pub mod user;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::db::AppState;

/// Build the REST API router. Auth claims are injected by the session
/// middleware layered on at serve time; handlers declare what they need
/// through extractors.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/verify", get(auth::verify))
        .route("/api/auth/admin-verify", get(auth::admin_verify))
        // Offers
        .route("/api/offers", get(offer::list_offers).post(offer::create_offer))
        .route("/api/offers/company/{company_id}", get(offer::list_company_offers))
        .route(
            "/api/offers/{id}",
            get(offer::get_offer)
                .put(offer::update_offer)
                .delete(offer::delete_offer),
        )
        // Applications
        .route("/api/applications", post(application::submit_application))
        .route(
            "/api/applications/students/{student_id}",
            get(application::list_student_applications),
        )
        .route(
            "/api/applications/offers/{offer_id}",
            get(application::list_offer_applications),
        )
        .route("/api/applications/{id}", get(application::get_application))
        .route(
            "/api/applications/{id}/status",
            put(application::set_application_status),
        )
        // Profiles
        .route(
            "/api/users/students/{id}",
            get(user::get_student_profile).put(user::update_student_profile),
        )
        .route(
            "/api/users/companies/{id}",
            get(user::get_company_profile).put(user::update_company_profile),
        )
        // Dashboards
        .route("/api/dashboard/company/stats", get(dashboard::company_stats))
        .route("/api/admin/statistics", get(dashboard::admin_statistics))
        .route(
            "/api/admin/recent-applications",
            get(dashboard::recent_applications),
        )
}
