use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{
    AppError, ApplicationResponse, ApplicationStatus, ApplicationWithOfferResponse, Role,
    StatusQuery, SubmitApplicationRequest,
};

use crate::auth::extractors::{AuthRequired, RoleRequired, StudentRequired};
use crate::auth::jwt::Claims;
use crate::error_convert::ValidateRequest;

/// POST /api/applications
///
/// One application per (student, offer): a second submission is a
/// conflict, not a replacement. The CV handle is required; a cover
/// letter is optional.
#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = SubmitApplicationRequest,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationResponse),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 403, description = "Not a student account", body = AppError),
        (status = 404, description = "Offer not found", body = AppError),
        (status = 409, description = "Already applied to this offer", body = AppError),
        (status = 422, description = "Missing CV document", body = AppError)
    ),
    tag = "applications"
)]
pub async fn submit_application(
    State(pool): State<Pool<Postgres>>,
    RoleRequired(claims): StudentRequired,
    Json(body): Json<SubmitApplicationRequest>,
) -> Result<(StatusCode, Json<ApplicationResponse>), AppError> {
    body.validate_request()?;

    let application = crate::repo::application::submit(&pool, claims.sub, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::try_from(application)?),
    ))
}

/// GET /api/applications/{id}
///
/// Visible to its three parties only: the applicant, the company that
/// owns the offer, and admins.
#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    params(("id" = String, Path, description = "Application UUID")),
    responses(
        (status = 200, description = "Application found", body = ApplicationResponse),
        (status = 403, description = "Not a party to this application", body = AppError),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "applications"
)]
pub async fn get_application(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
    Path(id): Path<String>,
) -> Result<Json<ApplicationResponse>, AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    let application = crate::repo::application::find_by_id(&pool, uuid)
        .await?
        .ok_or_else(|| AppError::not_found("Application not found"))?;

    let offer_owner = offer_owner(&pool, application.offer_id).await?;
    let is_party = claims.role == Role::Admin
        || claims.sub == application.student_id
        || claims.sub == offer_owner;

    if !is_party {
        return Err(AppError::forbidden(
            "You are not authorized to view this application",
        ));
    }

    Ok(Json(ApplicationResponse::try_from(application)?))
}

/// PUT /api/applications/{id}/status?status=ENUM
///
/// Moves an application through the review workflow. The status rides
/// in the query string. Who may move it where:
/// - the company owning the offer: any legal transition,
/// - the applicant: only to WITHDRAWN,
/// - admins: any legal transition.
/// Requesting the current status again succeeds without changing the
/// row; an illegal move is a conflict naming both statuses.
#[utoipa::path(
    put,
    path = "/api/applications/{id}/status",
    params(
        ("id" = String, Path, description = "Application UUID"),
        StatusQuery
    ),
    responses(
        (status = 200, description = "Status updated (or already held)", body = ApplicationResponse),
        (status = 400, description = "Unknown status value", body = AppError),
        (status = 403, description = "Not allowed to move this application", body = AppError),
        (status = 404, description = "Not found", body = AppError),
        (status = 409, description = "Transition not allowed by the workflow", body = AppError)
    ),
    tag = "applications"
)]
pub async fn set_application_status(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
    Path(id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<ApplicationResponse>, AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    let target = ApplicationStatus::parse(&query.status)
        .ok_or_else(|| AppError::bad_request(format!("Invalid status value: {}", query.status)))?;

    let application = crate::repo::application::find_by_id(&pool, uuid)
        .await?
        .ok_or_else(|| AppError::not_found("Application not found"))?;

    check_transition_authority(&pool, &claims, &application, target).await?;

    let updated = crate::repo::application::set_status(&pool, uuid, target).await?;
    Ok(Json(ApplicationResponse::try_from(updated)?))
}

/// GET /api/applications/students/{studentId}
///
/// A student's own applications, each joined with its offer.
#[utoipa::path(
    get,
    path = "/api/applications/students/{student_id}",
    params(("student_id" = String, Path, description = "Student account UUID")),
    responses(
        (status = 200, description = "The student's applications", body = [ApplicationWithOfferResponse]),
        (status = 403, description = "Not that student", body = AppError)
    ),
    tag = "applications"
)]
pub async fn list_student_applications(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<ApplicationWithOfferResponse>>, AppError> {
    let student_id =
        Uuid::parse_str(&student_id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    if claims.sub != student_id && claims.role != Role::Admin {
        return Err(AppError::forbidden(
            "You are not authorized to view these applications",
        ));
    }

    let pairs = crate::repo::application::list_by_student(&pool, student_id).await?;
    let rows = pairs
        .into_iter()
        .map(|(application, offer)| {
            Ok(ApplicationWithOfferResponse {
                application: application.try_into()?,
                offer: offer.into(),
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;
    Ok(Json(rows))
}

/// GET /api/applications/offers/{offerId}
///
/// Everything received for one offer, for the company's review queue.
#[utoipa::path(
    get,
    path = "/api/applications/offers/{offer_id}",
    params(("offer_id" = String, Path, description = "Offer UUID")),
    responses(
        (status = 200, description = "Applications for the offer", body = [ApplicationResponse]),
        (status = 403, description = "Not the owning company", body = AppError),
        (status = 404, description = "Offer not found", body = AppError)
    ),
    tag = "applications"
)]
pub async fn list_offer_applications(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
    Path(offer_id): Path<String>,
) -> Result<Json<Vec<ApplicationResponse>>, AppError> {
    let offer_id =
        Uuid::parse_str(&offer_id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    let offer = crate::repo::offer::find_by_id(&pool, offer_id)
        .await?
        .ok_or_else(|| AppError::not_found("Offer not found"))?;

    if claims.sub != offer.company_id && claims.role != Role::Admin {
        return Err(AppError::forbidden(
            "You are not authorized to view these applications",
        ));
    }

    let applications = crate::repo::application::list_by_offer(&pool, offer_id).await?;
    let rows = applications
        .into_iter()
        .map(ApplicationResponse::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(rows))
}

/// Resolve which account owns the offer an application points at.
pub(crate) async fn offer_owner(pool: &Pool<Postgres>, offer_id: Uuid) -> Result<Uuid, AppError> {
    let offer = crate::repo::offer::find_by_id(pool, offer_id)
        .await?
        .ok_or_else(|| AppError::internal("Application references a missing offer"))?;
    Ok(offer.company_id)
}

/// Reject callers who may not move this application to `target`.
/// Legality of the move itself is ruled on separately; a student
/// withdrawing an already-withdrawn application still passes here.
pub(crate) async fn check_transition_authority(
    pool: &Pool<Postgres>,
    claims: &Claims,
    application: &shared_types::Application,
    target: ApplicationStatus,
) -> Result<(), AppError> {
    match claims.role {
        Role::Admin => Ok(()),
        Role::Company => {
            if offer_owner(pool, application.offer_id).await? == claims.sub {
                Ok(())
            } else {
                Err(AppError::forbidden(
                    "You are not authorized to modify this application",
                ))
            }
        }
        Role::Student => {
            if claims.sub != application.student_id {
                return Err(AppError::forbidden(
                    "You are not authorized to modify this application",
                ));
            }
            if target != ApplicationStatus::Withdrawn {
                return Err(AppError::forbidden(
                    "Students can only withdraw their applications",
                ));
            }
            Ok(())
        }
    }
}
