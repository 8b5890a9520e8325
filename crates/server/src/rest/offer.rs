use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{AppError, CreateOfferRequest, OfferResponse, Role, UpdateOfferRequest};

use crate::auth::extractors::{AuthRequired, CompanyRequired, RoleRequired};
use crate::error_convert::ValidateRequest;

/// GET /api/offers
///
/// The whole directory, newest first. Public: browsing offers requires
/// no account. Filtering happens client-side over this list.
#[utoipa::path(
    get,
    path = "/api/offers",
    responses(
        (status = 200, description = "All offers, newest first", body = [OfferResponse])
    ),
    tag = "offers"
)]
pub async fn list_offers(
    State(pool): State<Pool<Postgres>>,
) -> Result<Json<Vec<OfferResponse>>, AppError> {
    let offers = crate::repo::offer::list_all(&pool).await?;
    Ok(Json(offers.into_iter().map(OfferResponse::from).collect()))
}

/// GET /api/offers/{id}
#[utoipa::path(
    get,
    path = "/api/offers/{id}",
    params(("id" = String, Path, description = "Offer UUID")),
    responses(
        (status = 200, description = "Offer found", body = OfferResponse),
        (status = 400, description = "Invalid UUID", body = AppError),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "offers"
)]
pub async fn get_offer(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<String>,
) -> Result<Json<OfferResponse>, AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    let offer = crate::repo::offer::find_by_id(&pool, uuid)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Offer {} not found", id)))?;

    Ok(Json(OfferResponse::from(offer)))
}

/// GET /api/offers/company/{companyId}
///
/// A company's own postings. Only that company or an admin may list
/// them; other accounts see the public directory instead.
#[utoipa::path(
    get,
    path = "/api/offers/company/{company_id}",
    params(("company_id" = String, Path, description = "Company account UUID")),
    responses(
        (status = 200, description = "Offers posted by the company", body = [OfferResponse]),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 403, description = "Not the owning company", body = AppError)
    ),
    tag = "offers"
)]
pub async fn list_company_offers(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
    Path(company_id): Path<String>,
) -> Result<Json<Vec<OfferResponse>>, AppError> {
    let company_id =
        Uuid::parse_str(&company_id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    if claims.sub != company_id && claims.role != Role::Admin {
        return Err(AppError::forbidden(
            "You are not authorized to view these offers",
        ));
    }

    let offers = crate::repo::offer::list_by_company(&pool, company_id).await?;
    Ok(Json(offers.into_iter().map(OfferResponse::from).collect()))
}

/// POST /api/offers
///
/// The owning company and its display name come from the session: the
/// profile row, not the request body, names the publisher.
#[utoipa::path(
    post,
    path = "/api/offers",
    request_body = CreateOfferRequest,
    responses(
        (status = 201, description = "Offer created", body = OfferResponse),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 403, description = "Not a company account", body = AppError),
        (status = 422, description = "Invalid offer data", body = AppError)
    ),
    tag = "offers"
)]
pub async fn create_offer(
    State(pool): State<Pool<Postgres>>,
    RoleRequired(claims): CompanyRequired,
    Json(body): Json<CreateOfferRequest>,
) -> Result<(StatusCode, Json<OfferResponse>), AppError> {
    body.validate_request()?;

    let profile = crate::repo::account::company_profile(&pool, claims.sub)
        .await?
        .ok_or_else(|| AppError::forbidden("Only company accounts can publish offers"))?;

    let offer =
        crate::repo::offer::create(&pool, claims.sub, &profile.company_name, body).await?;

    Ok((StatusCode::CREATED, Json(OfferResponse::from(offer))))
}

/// PUT /api/offers/{id}
#[utoipa::path(
    put,
    path = "/api/offers/{id}",
    params(("id" = String, Path, description = "Offer UUID")),
    request_body = UpdateOfferRequest,
    responses(
        (status = 200, description = "Offer updated", body = OfferResponse),
        (status = 403, description = "Not the owning company", body = AppError),
        (status = 404, description = "Not found", body = AppError),
        (status = 422, description = "Invalid offer data", body = AppError)
    ),
    tag = "offers"
)]
pub async fn update_offer(
    State(pool): State<Pool<Postgres>>,
    RoleRequired(claims): CompanyRequired,
    Path(id): Path<String>,
    Json(body): Json<UpdateOfferRequest>,
) -> Result<Json<OfferResponse>, AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    body.validate_request()?;

    let existing = crate::repo::offer::find_by_id(&pool, uuid)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Offer {} not found", id)))?;

    if existing.company_id != claims.sub {
        return Err(AppError::forbidden(
            "You are not authorized to modify this offer",
        ));
    }

    let updated = crate::repo::offer::update(&pool, uuid, body)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Offer {} not found", id)))?;

    Ok(Json(OfferResponse::from(updated)))
}

/// DELETE /api/offers/{id}
///
/// Refused with a conflict while any application references the offer;
/// applications are the student's record and never cascade away.
#[utoipa::path(
    delete,
    path = "/api/offers/{id}",
    params(("id" = String, Path, description = "Offer UUID")),
    responses(
        (status = 204, description = "Offer deleted"),
        (status = 403, description = "Not the owning company", body = AppError),
        (status = 404, description = "Not found", body = AppError),
        (status = 409, description = "Offer has applications", body = AppError)
    ),
    tag = "offers"
)]
pub async fn delete_offer(
    State(pool): State<Pool<Postgres>>,
    RoleRequired(claims): CompanyRequired,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    let existing = crate::repo::offer::find_by_id(&pool, uuid)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Offer {} not found", id)))?;

    if existing.company_id != claims.sub {
        return Err(AppError::forbidden(
            "You are not authorized to delete this offer",
        ));
    }

    crate::repo::offer::delete(&pool, uuid).await?;
    Ok(StatusCode::NO_CONTENT)
}
