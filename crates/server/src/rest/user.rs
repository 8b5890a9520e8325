use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{
    AppError, CompanyProfileResponse, StudentProfileResponse, UpdateCompanyProfileRequest,
    UpdateStudentProfileRequest,
};

use crate::auth::extractors::AuthRequired;

/// GET /api/users/students/{id}
///
/// Any authenticated account may read a student profile; companies
/// review the profiles behind their applications.
#[utoipa::path(
    get,
    path = "/api/users/students/{id}",
    params(("id" = String, Path, description = "Student account UUID")),
    responses(
        (status = 200, description = "Student profile", body = StudentProfileResponse),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 404, description = "No such student", body = AppError)
    ),
    tag = "users"
)]
pub async fn get_student_profile(
    State(pool): State<Pool<Postgres>>,
    _auth: AuthRequired,
    Path(id): Path<String>,
) -> Result<Json<StudentProfileResponse>, AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    let profile = crate::repo::account::student_profile(&pool, uuid)
        .await?
        .ok_or_else(|| AppError::not_found("Student profile not found"))?;

    Ok(Json(StudentProfileResponse::from(profile)))
}

/// PUT /api/users/students/{id}
///
/// Profiles are self-service: only the account itself may edit.
#[utoipa::path(
    put,
    path = "/api/users/students/{id}",
    params(("id" = String, Path, description = "Student account UUID")),
    request_body = UpdateStudentProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = StudentProfileResponse),
        (status = 403, description = "Not your profile", body = AppError),
        (status = 404, description = "No such student", body = AppError)
    ),
    tag = "users"
)]
pub async fn update_student_profile(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
    Path(id): Path<String>,
    Json(body): Json<UpdateStudentProfileRequest>,
) -> Result<Json<StudentProfileResponse>, AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    if claims.sub != uuid {
        return Err(AppError::forbidden("You can only edit your own profile"));
    }

    let profile = crate::repo::account::update_student_profile(&pool, uuid, body)
        .await?
        .ok_or_else(|| AppError::not_found("Student profile not found"))?;

    Ok(Json(StudentProfileResponse::from(profile)))
}

/// GET /api/users/companies/{id}
#[utoipa::path(
    get,
    path = "/api/users/companies/{id}",
    params(("id" = String, Path, description = "Company account UUID")),
    responses(
        (status = 200, description = "Company profile", body = CompanyProfileResponse),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 404, description = "No such company", body = AppError)
    ),
    tag = "users"
)]
pub async fn get_company_profile(
    State(pool): State<Pool<Postgres>>,
    _auth: AuthRequired,
    Path(id): Path<String>,
) -> Result<Json<CompanyProfileResponse>, AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    let profile = crate::repo::account::company_profile(&pool, uuid)
        .await?
        .ok_or_else(|| AppError::not_found("Company profile not found"))?;

    Ok(Json(CompanyProfileResponse::from(profile)))
}

/// PUT /api/users/companies/{id}
#[utoipa::path(
    put,
    path = "/api/users/companies/{id}",
    params(("id" = String, Path, description = "Company account UUID")),
    request_body = UpdateCompanyProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = CompanyProfileResponse),
        (status = 403, description = "Not your profile", body = AppError),
        (status = 404, description = "No such company", body = AppError)
    ),
    tag = "users"
)]
pub async fn update_company_profile(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
    Path(id): Path<String>,
    Json(body): Json<UpdateCompanyProfileRequest>,
) -> Result<Json<CompanyProfileResponse>, AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    if claims.sub != uuid {
        return Err(AppError::forbidden("You can only edit your own profile"));
    }

    let profile = crate::repo::account::update_company_profile(&pool, uuid, body)
        .await?
        .ok_or_else(|| AppError::not_found("Company profile not found"))?;

    Ok(Json(CompanyProfileResponse::from(profile)))
}
