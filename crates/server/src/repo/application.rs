use std::collections::HashMap;

use shared_types::{AppError, Application, ApplicationStatus, Offer, SubmitApplicationRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Submit an application for an offer. The offer is checked up front
/// so an unknown offer reads as not-found rather than as a constraint
/// violation. A second submission by the same student trips the unique
/// index and surfaces as a conflict.
pub async fn submit(
    pool: &Pool<Postgres>,
    student_id: Uuid,
    req: SubmitApplicationRequest,
) -> Result<Application, AppError> {
    let offer_exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM offers WHERE id = $1)")
            .bind(req.offer_id)
            .fetch_one(pool)
            .await
            .map_err(SqlxErrorExt::into_app_error)?;

    if !offer_exists {
        return Err(AppError::not_found("Offer not found"));
    }

    let row = sqlx::query_as::<_, Application>(
        r#"
        INSERT INTO applications (student_id, offer_id, cv_document, cover_letter_document)
        VALUES ($1, $2, $3, $4)
        RETURNING
            id, student_id, offer_id, cv_document, cover_letter_document,
            status, submitted_at, updated_at
        "#,
    )
    .bind(student_id)
    .bind(req.offer_id)
    .bind(req.cv)
    .bind(req.cover_letter)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Find an application by ID.
pub async fn find_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<Application>, AppError> {
    let row = sqlx::query_as::<_, Application>(
        r#"
        SELECT
            id, student_id, offer_id, cv_document, cover_letter_document,
            status, submitted_at, updated_at
        FROM applications
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// List a student's applications, newest first, each paired with its
/// offer. The offers restrict deletion while applications reference
/// them, so every pair resolves.
pub async fn list_by_student(
    pool: &Pool<Postgres>,
    student_id: Uuid,
) -> Result<Vec<(Application, Offer)>, AppError> {
    let applications = sqlx::query_as::<_, Application>(
        r#"
        SELECT
            id, student_id, offer_id, cv_document, cover_letter_document,
            status, submitted_at, updated_at
        FROM applications
        WHERE student_id = $1
        ORDER BY submitted_at DESC
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let offer_ids: Vec<Uuid> = applications.iter().map(|a| a.offer_id).collect();

    let offers = sqlx::query_as::<_, Offer>(
        r#"
        SELECT
            id, company_id, title, company_name, location, sector,
            duration, offer_type, description, requirements,
            created_at, updated_at
        FROM offers
        WHERE id = ANY($1)
        "#,
    )
    .bind(&offer_ids)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let mut by_id: HashMap<Uuid, Offer> = offers.into_iter().map(|o| (o.id, o)).collect();

    Ok(applications
        .into_iter()
        .filter_map(|a| by_id.remove(&a.offer_id).map(|o| (a, o)))
        .collect())
}

/// List the applications received for one offer, newest first.
pub async fn list_by_offer(
    pool: &Pool<Postgres>,
    offer_id: Uuid,
) -> Result<Vec<Application>, AppError> {
    let rows = sqlx::query_as::<_, Application>(
        r#"
        SELECT
            id, student_id, offer_id, cv_document, cover_letter_document,
            status, submitted_at, updated_at
        FROM applications
        WHERE offer_id = $1
        ORDER BY submitted_at DESC
        "#,
    )
    .bind(offer_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// Move an application to `target`, enforcing the status workflow.
///
/// Re-requesting the current status returns the row untouched, so a
/// retried request cannot fail or bump `updated_at`. An illegal move
/// is a conflict naming both statuses. Access checks belong to the
/// caller; this only rules on legality.
pub async fn set_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    target: ApplicationStatus,
) -> Result<Application, AppError> {
    let row = find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Application not found"))?;

    let current = ApplicationStatus::parse(&row.status).ok_or_else(|| {
        AppError::internal(format!("Application {} has malformed status", row.id))
    })?;

    if current == target {
        return Ok(row);
    }

    if !current.allowed_transitions().contains(&target) {
        return Err(AppError::conflict(format!(
            "Cannot change application status from {current} to {target}"
        )));
    }

    let updated = sqlx::query_as::<_, Application>(
        r#"
        UPDATE applications
        SET status = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING
            id, student_id, offer_id, cv_document, cover_letter_document,
            status, submitted_at, updated_at
        "#,
    )
    .bind(id)
    .bind(target.as_str())
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(updated)
}
