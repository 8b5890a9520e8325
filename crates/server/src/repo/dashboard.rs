use chrono::{DateTime, Utc};
use shared_types::{
    AdminStatistics, AppError, ApplicationStatus, CompanyDashboardStats,
    RecentApplicationResponse,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Aggregate one company's offers and the applications they received.
/// The breakdown starts zeroed so every status is present even when
/// the GROUP BY returns no row for it.
pub async fn company_stats(
    pool: &Pool<Postgres>,
    company_id: Uuid,
) -> Result<CompanyDashboardStats, AppError> {
    let total_offers =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM offers WHERE company_id = $1")
            .bind(company_id)
            .fetch_one(pool)
            .await
            .map_err(SqlxErrorExt::into_app_error)?;

    let counts = sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT a.status, COUNT(*)
        FROM applications a
        JOIN offers o ON o.id = a.offer_id
        WHERE o.company_id = $1
        GROUP BY a.status
        "#,
    )
    .bind(company_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let mut applications_by_status = CompanyDashboardStats::zeroed_breakdown();
    let mut total_applications = 0;
    for (status, count) in counts {
        total_applications += count;
        applications_by_status.insert(status, count);
    }

    Ok(CompanyDashboardStats {
        total_offers,
        total_applications,
        applications_by_status,
    })
}

/// Platform-wide totals for the admin dashboard.
pub async fn admin_statistics(pool: &Pool<Postgres>) -> Result<AdminStatistics, AppError> {
    let (total_students, total_companies, total_offers, total_applications) =
        sqlx::query_as::<_, (i64, i64, i64, i64)>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM accounts WHERE role = 'STUDENT'),
                (SELECT COUNT(*) FROM accounts WHERE role = 'COMPANY'),
                (SELECT COUNT(*) FROM offers),
                (SELECT COUNT(*) FROM applications)
            "#,
        )
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(AdminStatistics {
        total_students,
        total_companies,
        total_offers,
        total_applications,
    })
}

#[derive(sqlx::FromRow)]
struct RecentApplicationRow {
    id: Uuid,
    student_name: String,
    offer_title: String,
    company_name: String,
    status: String,
    submitted_at: DateTime<Utc>,
}

/// The most recent applications across the platform, joined with the
/// names an admin scans for.
pub async fn recent_applications(
    pool: &Pool<Postgres>,
    limit: i64,
) -> Result<Vec<RecentApplicationResponse>, AppError> {
    let rows = sqlx::query_as::<_, RecentApplicationRow>(
        r#"
        SELECT
            a.id,
            sp.full_name AS student_name,
            o.title AS offer_title,
            o.company_name,
            a.status,
            a.submitted_at
        FROM applications a
        JOIN offers o ON o.id = a.offer_id
        JOIN student_profiles sp ON sp.account_id = a.student_id
        ORDER BY a.submitted_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    rows.into_iter()
        .map(|r| {
            // Same rule as every other read path: a stored status that
            // no longer parses is an internal error, not a default.
            let status = ApplicationStatus::parse(&r.status).ok_or_else(|| {
                AppError::internal(format!("Application {} has malformed status", r.id))
            })?;
            Ok(RecentApplicationResponse {
                id: r.id.to_string(),
                student_name: r.student_name,
                offer_title: r.offer_title,
                company_name: r.company_name,
                status,
                submitted_at: r.submitted_at.to_rfc3339(),
            })
        })
        .collect()
}
