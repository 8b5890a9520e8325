use dioxus::prelude::*;
use shared_types::{
    CompanyProfileResponse, StudentProfileResponse, UpdateCompanyProfileRequest,
    UpdateStudentProfileRequest,
};

/// Fetch a student profile. Any authenticated account may read one;
/// companies review the profiles behind their applications.
#[server]
pub async fn get_student_profile(id: String) -> Result<StudentProfileResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use shared_types::AppError;
    use uuid::Uuid;

    super::session::require_session()?;

    let uuid = Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid UUID format").into_server_fn_error())?;

    let pool = get_db().await;
    let profile = crate::repo::account::student_profile(pool, uuid)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::not_found("Student profile not found").into_server_fn_error())?;

    Ok(StudentProfileResponse::from(profile))
}

/// Update the caller's own student profile.
#[server]
pub async fn update_my_student_profile(
    body: UpdateStudentProfileRequest,
) -> Result<StudentProfileResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use shared_types::AppError;

    let claims = super::session::require_session()?;

    let pool = get_db().await;
    let profile = crate::repo::account::update_student_profile(pool, claims.sub, body)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::not_found("Student profile not found").into_server_fn_error())?;

    Ok(StudentProfileResponse::from(profile))
}

/// Fetch a company profile.
#[server]
pub async fn get_company_profile(id: String) -> Result<CompanyProfileResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use shared_types::AppError;
    use uuid::Uuid;

    super::session::require_session()?;

    let uuid = Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid UUID format").into_server_fn_error())?;

    let pool = get_db().await;
    let profile = crate::repo::account::company_profile(pool, uuid)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::not_found("Company profile not found").into_server_fn_error())?;

    Ok(CompanyProfileResponse::from(profile))
}

/// Update the caller's own company profile.
#[server]
pub async fn update_my_company_profile(
    body: UpdateCompanyProfileRequest,
) -> Result<CompanyProfileResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use shared_types::AppError;

    let claims = super::session::require_session()?;

    let pool = get_db().await;
    let profile = crate::repo::account::update_company_profile(pool, claims.sub, body)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::not_found("Company profile not found").into_server_fn_error())?;

    Ok(CompanyProfileResponse::from(profile))
}
