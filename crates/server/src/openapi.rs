use axum::Router;
use shared_types::{
    AdminStatistics, AppError, AppErrorKind, ApplicationResponse, ApplicationStatus,
    ApplicationWithOfferResponse, AuthResponse, CompanyDashboardStats, CompanyProfileResponse,
    CreateOfferRequest, LoginRequest, OfferResponse, RecentApplicationResponse, RegisterRequest,
    Role, SessionUser, StudentProfileResponse, SubmitApplicationRequest,
    UpdateCompanyProfileRequest, UpdateOfferRequest, UpdateStudentProfileRequest,
};
use sqlx::{Pool, Postgres};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::db::AppState;
use crate::health;
use crate::rest;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        rest::auth::register,
        rest::auth::login,
        rest::auth::verify,
        rest::auth::admin_verify,
        // Offers
        rest::offer::list_offers,
        rest::offer::get_offer,
        rest::offer::list_company_offers,
        rest::offer::create_offer,
        rest::offer::update_offer,
        rest::offer::delete_offer,
        // Applications
        rest::application::submit_application,
        rest::application::get_application,
        rest::application::set_application_status,
        rest::application::list_student_applications,
        rest::application::list_offer_applications,
        // Profiles
        rest::user::get_student_profile,
        rest::user::update_student_profile,
        rest::user::get_company_profile,
        rest::user::update_company_profile,
        // Dashboards
        rest::dashboard::company_stats,
        rest::dashboard::admin_statistics,
        rest::dashboard::recent_applications,
        health::health_check,
    ),
    components(schemas(
        AppError, AppErrorKind,
        Role, SessionUser, AuthResponse, LoginRequest, RegisterRequest,
        OfferResponse, CreateOfferRequest, UpdateOfferRequest,
        ApplicationStatus, ApplicationResponse, ApplicationWithOfferResponse,
        SubmitApplicationRequest,
        StudentProfileResponse, UpdateStudentProfileRequest,
        CompanyProfileResponse, UpdateCompanyProfileRequest,
        CompanyDashboardStats, AdminStatistics, RecentApplicationResponse,
        health::HealthResponse,
    )),
    tags(
        (name = "auth", description = "Registration, login and session verification"),
        (name = "offers", description = "Offer directory and company postings"),
        (name = "applications", description = "Application submission and review workflow"),
        (name = "users", description = "Student and company profiles"),
        (name = "dashboard", description = "Company dashboard statistics"),
        (name = "admin", description = "Platform administration"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "JobBridge API",
        description = "Internship and job marketplace connecting students with companies",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router serving the REST API under `/api/*`, the health
/// probe at `/health`, and Swagger UI backed by the generated document.
pub fn api_router(pool: Pool<Postgres>) -> Router {
    let state = AppState { pool };

    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
