use shared_types::{AppError, CreateOfferRequest, Offer, UpdateOfferRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Insert a new offer. The owning company and its display name come
/// from the caller's session, never from the request body.
pub async fn create(
    pool: &Pool<Postgres>,
    company_id: Uuid,
    company_name: &str,
    req: CreateOfferRequest,
) -> Result<Offer, AppError> {
    let row = sqlx::query_as::<_, Offer>(
        r#"
        INSERT INTO offers (
            company_id, title, company_name, location, sector,
            duration, offer_type, description, requirements
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING
            id, company_id, title, company_name, location, sector,
            duration, offer_type, description, requirements,
            created_at, updated_at
        "#,
    )
    .bind(company_id)
    .bind(req.title)
    .bind(company_name)
    .bind(req.location)
    .bind(req.sector)
    .bind(req.duration)
    .bind(req.offer_type)
    .bind(req.description)
    .bind(req.requirements)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Find an offer by ID.
pub async fn find_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<Offer>, AppError> {
    let row = sqlx::query_as::<_, Offer>(
        r#"
        SELECT
            id, company_id, title, company_name, location, sector,
            duration, offer_type, description, requirements,
            created_at, updated_at
        FROM offers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// List every offer, newest first. The directory filters client-side,
/// so this is the only listing shape the catalog needs.
pub async fn list_all(pool: &Pool<Postgres>) -> Result<Vec<Offer>, AppError> {
    let rows = sqlx::query_as::<_, Offer>(
        r#"
        SELECT
            id, company_id, title, company_name, location, sector,
            duration, offer_type, description, requirements,
            created_at, updated_at
        FROM offers
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// List the offers posted by one company, newest first.
pub async fn list_by_company(
    pool: &Pool<Postgres>,
    company_id: Uuid,
) -> Result<Vec<Offer>, AppError> {
    let rows = sqlx::query_as::<_, Offer>(
        r#"
        SELECT
            id, company_id, title, company_name, location, sector,
            duration, offer_type, description, requirements,
            created_at, updated_at
        FROM offers
        WHERE company_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(company_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// Update an offer. Only provided fields change. Ownership is checked
/// by the caller before this runs.
pub async fn update(
    pool: &Pool<Postgres>,
    id: Uuid,
    req: UpdateOfferRequest,
) -> Result<Option<Offer>, AppError> {
    let existing = match find_by_id(pool, id).await? {
        Some(o) => o,
        None => return Ok(None),
    };

    let title = req.title.unwrap_or(existing.title);
    let location = req.location.unwrap_or(existing.location);
    let sector = req.sector.unwrap_or(existing.sector);
    let duration = req.duration.unwrap_or(existing.duration);
    let offer_type = req.offer_type.unwrap_or(existing.offer_type);
    let description = req.description.unwrap_or(existing.description);
    let requirements = req.requirements.unwrap_or(existing.requirements);

    let row = sqlx::query_as::<_, Offer>(
        r#"
        UPDATE offers SET
            title = $2, location = $3, sector = $4, duration = $5,
            offer_type = $6, description = $7, requirements = $8,
            updated_at = NOW()
        WHERE id = $1
        RETURNING
            id, company_id, title, company_name, location, sector,
            duration, offer_type, description, requirements,
            created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(location)
    .bind(sector)
    .bind(duration)
    .bind(offer_type)
    .bind(description)
    .bind(requirements)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(Some(row))
}

/// Delete an offer. Returns false when no such offer exists. An offer
/// with applications is kept (the applications table restricts the
/// delete) and the violation surfaces as a conflict.
pub async fn delete(pool: &Pool<Postgres>, id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM offers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}
