use dioxus::prelude::*;
use shared_types::{AdminStatistics, CompanyDashboardStats, RecentApplicationResponse};

/// How many rows the admin "recent applications" panel shows.
#[cfg(feature = "server")]
const RECENT_APPLICATIONS_LIMIT: i64 = 10;

/// Totals for the caller's own offers and the applications they received.
#[server]
pub async fn company_dashboard_stats() -> Result<CompanyDashboardStats, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use shared_types::Role;

    let claims = super::session::require_role(Role::Company)?;

    let pool = get_db().await;
    crate::repo::dashboard::company_stats(pool, claims.sub)
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}

/// Platform-wide totals for the admin dashboard.
#[server]
pub async fn admin_statistics() -> Result<AdminStatistics, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use shared_types::Role;

    super::session::require_role(Role::Admin)?;

    let pool = get_db().await;
    crate::repo::dashboard::admin_statistics(pool)
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}

/// The latest applications across the platform, for the admin overview.
#[server]
pub async fn recent_applications() -> Result<Vec<RecentApplicationResponse>, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use shared_types::Role;

    super::session::require_role(Role::Admin)?;

    let pool = get_db().await;
    crate::repo::dashboard::recent_applications(pool, RECENT_APPLICATIONS_LIMIT)
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}
