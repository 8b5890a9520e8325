use dioxus::prelude::*;
use shared_types::{
    ApplicationResponse, ApplicationWithOfferResponse, SubmitApplicationRequest,
};

/// Submit an application against an offer. One per (student, offer).
#[cfg_attr(feature = "server", tracing::instrument(skip(body)))]
#[server]
pub async fn submit_application(
    body: SubmitApplicationRequest,
) -> Result<ApplicationResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::{AppErrorExt, ValidateRequest};
    use shared_types::Role;

    let claims = super::session::require_role(Role::Student)?;
    body.validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    let pool = get_db().await;
    let application = crate::repo::application::submit(pool, claims.sub, body)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    ApplicationResponse::try_from(application).map_err(AppErrorExt::into_server_fn_error)
}

/// The caller's own applications, each joined with its offer.
#[server]
pub async fn list_my_applications() -> Result<Vec<ApplicationWithOfferResponse>, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use shared_types::AppError;

    let claims = super::session::require_session()?;

    let pool = get_db().await;
    let pairs = crate::repo::application::list_by_student(pool, claims.sub)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    pairs
        .into_iter()
        .map(|(application, offer)| {
            Ok(ApplicationWithOfferResponse {
                application: application.try_into()?,
                offer: offer.into(),
            })
        })
        .collect::<Result<Vec<_>, AppError>>()
        .map_err(AppErrorExt::into_server_fn_error)
}

/// Applications received for one of the caller's offers.
#[server]
pub async fn list_offer_applications(
    offer_id: String,
) -> Result<Vec<ApplicationResponse>, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use shared_types::{AppError, Role};
    use uuid::Uuid;

    let claims = super::session::require_session()?;

    let uuid = Uuid::parse_str(&offer_id)
        .map_err(|_| AppError::bad_request("Invalid UUID format").into_server_fn_error())?;

    let pool = get_db().await;
    let offer = crate::repo::offer::find_by_id(pool, uuid)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::not_found("Offer not found").into_server_fn_error())?;

    if claims.sub != offer.company_id && claims.role != Role::Admin {
        return Err(
            AppError::forbidden("You are not authorized to view these applications")
                .into_server_fn_error(),
        );
    }

    let applications = crate::repo::application::list_by_offer(pool, uuid)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    applications
        .into_iter()
        .map(ApplicationResponse::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(AppErrorExt::into_server_fn_error)
}

/// Get one application. Visible to its parties only: the applicant, the
/// company owning the offer, and admins.
#[server]
pub async fn get_application(id: String) -> Result<ApplicationResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use shared_types::{AppError, Role};
    use uuid::Uuid;

    let claims = super::session::require_session()?;

    let uuid = Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid UUID format").into_server_fn_error())?;

    let pool = get_db().await;
    let application = crate::repo::application::find_by_id(pool, uuid)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::not_found("Application not found").into_server_fn_error())?;

    let offer_owner = crate::rest::application::offer_owner(pool, application.offer_id)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;
    let is_party = claims.role == Role::Admin
        || claims.sub == application.student_id
        || claims.sub == offer_owner;

    if !is_party {
        return Err(
            AppError::forbidden("You are not authorized to view this application")
                .into_server_fn_error(),
        );
    }

    ApplicationResponse::try_from(application).map_err(AppErrorExt::into_server_fn_error)
}

/// Move an application through the review workflow. The same authority
/// and legality rules as the REST endpoint: companies and admins may
/// take any legal transition, the applicant only WITHDRAWN, and
/// re-requesting the held status is a no-op.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn set_application_status(
    id: String,
    status: String,
) -> Result<ApplicationResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use shared_types::{AppError, ApplicationStatus};
    use uuid::Uuid;

    let claims = super::session::require_session()?;

    let uuid = Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid UUID format").into_server_fn_error())?;

    let target = ApplicationStatus::parse(&status).ok_or_else(|| {
        AppError::bad_request(format!("Invalid status value: {status}")).into_server_fn_error()
    })?;

    let pool = get_db().await;
    let application = crate::repo::application::find_by_id(pool, uuid)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::not_found("Application not found").into_server_fn_error())?;

    crate::rest::application::check_transition_authority(pool, &claims, &application, target)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    let updated = crate::repo::application::set_status(pool, uuid, target)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    ApplicationResponse::try_from(updated).map_err(AppErrorExt::into_server_fn_error)
}
