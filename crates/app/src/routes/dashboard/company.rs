use dioxus::prelude::*;
use shared_types::ApplicationStatus;

use crate::routes::Route;

/// Company home: totals for the caller's offers plus a per-status
/// breakdown of the applications they received. The breakdown renders
/// every status in workflow order, zero counts included.
#[component]
pub fn CompanyDashboard() -> Element {
    let stats =
        use_server_future(move || async move { server::api::company_dashboard_stats().await })?;

    let result = stats.read().as_ref().cloned();

    rsx! {
        div { class: "company-dashboard",
            div { class: "page-header",
                h1 { "Dashboard" }
                Link { class: "button", to: Route::OfferNew {}, "New offer" }
            }

            match result {
                Some(Ok(stats)) => rsx! {
                    div { class: "stat-cards",
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.total_offers}" }
                            span { class: "stat-label", "Offers published" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.total_applications}" }
                            span { class: "stat-label", "Applications received" }
                        }
                    }
                    section { class: "status-breakdown",
                        h2 { "Applications by status" }
                        table { class: "data-table",
                            tbody {
                                for status in ApplicationStatus::all() {
                                    tr { key: "{status}",
                                        td {
                                            span { class: "status status-{status}", "{status.label()}" }
                                        }
                                        td { class: "stat-count",
                                            "{stats.applications_by_status.get(status.as_str()).copied().unwrap_or(0)}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    p {
                        Link { to: Route::CompanyOffers {}, "Manage my offers" }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "load-error",
                        "{shared_types::AppError::friendly_message(&e.to_string())}"
                    }
                },
                None => rsx! {
                    p { class: "page-loading", "Loading dashboard..." }
                },
            }
        }
    }
}
