use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::application::ApplicationStatus;

/// Aggregates for the company dashboard, scoped to the company's own
/// offers. Every status appears in the breakdown, zero counts included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CompanyDashboardStats {
    pub total_offers: i64,
    pub total_applications: i64,
    pub applications_by_status: HashMap<String, i64>,
}

impl CompanyDashboardStats {
    /// Breakdown map with a zeroed entry per status, ready to be filled
    /// from a GROUP BY.
    pub fn zeroed_breakdown() -> HashMap<String, i64> {
        ApplicationStatus::all()
            .iter()
            .map(|s| (s.as_str().to_string(), 0))
            .collect()
    }
}

/// Platform-wide totals for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AdminStatistics {
    pub total_students: i64,
    pub total_companies: i64,
    pub total_offers: i64,
    pub total_applications: i64,
}

/// One row of the admin "recent applications" table: the application
/// joined with the names a reviewer scans for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecentApplicationResponse {
    pub id: String,
    pub student_name: String,
    pub offer_title: String,
    pub company_name: String,
    pub status: ApplicationStatus,
    pub submitted_at: String,
}
