use axum::{extract::State, Json};
use sqlx::{Pool, Postgres};

use shared_types::{
    AdminStatistics, AppError, CompanyDashboardStats, RecentApplicationResponse,
};

use crate::auth::extractors::{AdminRequired, CompanyRequired, RoleRequired};

/// How many rows the admin "recent applications" panel shows.
const RECENT_APPLICATIONS_LIMIT: i64 = 10;

/// GET /api/dashboard/company/stats
///
/// Totals for the caller's own offers. The status breakdown always
/// carries every status, zero counts included, so the dashboard never
/// has to guess at missing keys.
#[utoipa::path(
    get,
    path = "/api/dashboard/company/stats",
    responses(
        (status = 200, description = "Company dashboard totals", body = CompanyDashboardStats),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 403, description = "Not a company account", body = AppError)
    ),
    tag = "dashboard"
)]
pub async fn company_stats(
    State(pool): State<Pool<Postgres>>,
    RoleRequired(claims): CompanyRequired,
) -> Result<Json<CompanyDashboardStats>, AppError> {
    let stats = crate::repo::dashboard::company_stats(&pool, claims.sub).await?;
    Ok(Json(stats))
}

/// GET /api/admin/statistics
#[utoipa::path(
    get,
    path = "/api/admin/statistics",
    responses(
        (status = 200, description = "Platform-wide totals", body = AdminStatistics),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 403, description = "Not an admin", body = AppError)
    ),
    tag = "admin"
)]
pub async fn admin_statistics(
    State(pool): State<Pool<Postgres>>,
    _auth: AdminRequired,
) -> Result<Json<AdminStatistics>, AppError> {
    let stats = crate::repo::dashboard::admin_statistics(&pool).await?;
    Ok(Json(stats))
}

/// GET /api/admin/recent-applications
#[utoipa::path(
    get,
    path = "/api/admin/recent-applications",
    responses(
        (status = 200, description = "Latest applications across the platform", body = [RecentApplicationResponse]),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 403, description = "Not an admin", body = AppError)
    ),
    tag = "admin"
)]
pub async fn recent_applications(
    State(pool): State<Pool<Postgres>>,
    _auth: AdminRequired,
) -> Result<Json<Vec<RecentApplicationResponse>>, AppError> {
    let rows =
        crate::repo::dashboard::recent_applications(&pool, RECENT_APPLICATIONS_LIMIT).await?;
    Ok(Json(rows))
}
