use dioxus::prelude::*;
use shared_types::{CreateOfferRequest, OfferResponse, UpdateOfferRequest};

/// Fetch the whole offer directory, newest first. Public: the directory
/// is browsable before login; filtering happens client-side.
#[server]
pub async fn list_offers() -> Result<Vec<OfferResponse>, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;

    let pool = get_db().await;
    let offers = crate::repo::offer::list_all(pool)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    Ok(offers.into_iter().map(OfferResponse::from).collect())
}

/// Get a single offer by id. Public.
#[server]
pub async fn get_offer(id: String) -> Result<OfferResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use shared_types::AppError;
    use uuid::Uuid;

    let uuid = Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid UUID format").into_server_fn_error())?;

    let pool = get_db().await;
    let offer = crate::repo::offer::find_by_id(pool, uuid)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| {
            AppError::not_found(format!("Offer {id} not found")).into_server_fn_error()
        })?;

    Ok(OfferResponse::from(offer))
}

/// List the caller's own postings (company accounts).
#[server]
pub async fn list_my_offers() -> Result<Vec<OfferResponse>, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use shared_types::Role;

    let claims = super::session::require_role(Role::Company)?;

    let pool = get_db().await;
    let offers = crate::repo::offer::list_by_company(pool, claims.sub)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    Ok(offers.into_iter().map(OfferResponse::from).collect())
}

/// Publish an offer. The owning company and its display name come from
/// the session and profile, never from the body.
#[server]
pub async fn create_offer(body: CreateOfferRequest) -> Result<OfferResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::{AppErrorExt, ValidateRequest};
    use shared_types::{AppError, Role};

    let claims = super::session::require_role(Role::Company)?;
    body.validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    let pool = get_db().await;
    let profile = crate::repo::account::company_profile(pool, claims.sub)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| {
            AppError::forbidden("Only company accounts can publish offers").into_server_fn_error()
        })?;

    let offer = crate::repo::offer::create(pool, claims.sub, &profile.company_name, body)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    Ok(OfferResponse::from(offer))
}

/// Update one of the caller's offers.
#[server]
pub async fn update_offer(
    id: String,
    body: UpdateOfferRequest,
) -> Result<OfferResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::{AppErrorExt, ValidateRequest};
    use shared_types::{AppError, Role};
    use uuid::Uuid;

    let claims = super::session::require_role(Role::Company)?;
    body.validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    let uuid = Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid UUID format").into_server_fn_error())?;

    let pool = get_db().await;
    let existing = crate::repo::offer::find_by_id(pool, uuid)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| {
            AppError::not_found(format!("Offer {id} not found")).into_server_fn_error()
        })?;

    if existing.company_id != claims.sub {
        return Err(AppError::forbidden("You are not authorized to modify this offer")
            .into_server_fn_error());
    }

    let updated = crate::repo::offer::update(pool, uuid, body)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| {
            AppError::not_found(format!("Offer {id} not found")).into_server_fn_error()
        })?;

    Ok(OfferResponse::from(updated))
}

/// Delete one of the caller's offers. Refused with a conflict while any
/// application references it.
#[server]
pub async fn delete_offer(id: String) -> Result<(), ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use shared_types::{AppError, Role};
    use uuid::Uuid;

    let claims = super::session::require_role(Role::Company)?;

    let uuid = Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid UUID format").into_server_fn_error())?;

    let pool = get_db().await;
    let existing = crate::repo::offer::find_by_id(pool, uuid)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| {
            AppError::not_found(format!("Offer {id} not found")).into_server_fn_error()
        })?;

    if existing.company_id != claims.sub {
        return Err(AppError::forbidden("You are not authorized to delete this offer")
            .into_server_fn_error());
    }

    crate::repo::offer::delete(pool, uuid)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    Ok(())
}
