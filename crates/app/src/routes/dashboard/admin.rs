use dioxus::prelude::*;

use crate::format_helpers::format_date_human;

/// Admin overview: platform-wide totals and the latest applications.
#[component]
pub fn AdminDashboard() -> Element {
    let stats = use_server_future(move || async move { server::api::admin_statistics().await })?;
    let recent =
        use_server_future(move || async move { server::api::recent_applications().await })?;

    let stats_result = stats.read().as_ref().cloned();
    let recent_result = recent.read().as_ref().cloned();

    rsx! {
        div { class: "admin-dashboard",
            h1 { "Administration" }

            match stats_result {
                Some(Ok(stats)) => rsx! {
                    div { class: "stat-cards",
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.total_students}" }
                            span { class: "stat-label", "Students" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.total_companies}" }
                            span { class: "stat-label", "Companies" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.total_offers}" }
                            span { class: "stat-label", "Offers" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.total_applications}" }
                            span { class: "stat-label", "Applications" }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "load-error",
                        "{shared_types::AppError::friendly_message(&e.to_string())}"
                    }
                },
                None => rsx! {
                    p { class: "page-loading", "Loading statistics..." }
                },
            }

            section { class: "recent-applications",
                h2 { "Recent applications" }
                match recent_result {
                    Some(Ok(list)) => rsx! {
                        if list.is_empty() {
                            p { class: "empty-state", "No applications yet." }
                        } else {
                            table { class: "data-table",
                                thead {
                                    tr {
                                        th { "Student" }
                                        th { "Offer" }
                                        th { "Company" }
                                        th { "Status" }
                                        th { "Submitted" }
                                    }
                                }
                                tbody {
                                    for row in list {
                                        tr { key: "{row.id}",
                                            td { "{row.student_name}" }
                                            td { "{row.offer_title}" }
                                            td { "{row.company_name}" }
                                            td {
                                                span { class: "status status-{row.status}",
                                                    "{row.status.label()}"
                                                }
                                            }
                                            td { "{format_date_human(&row.submitted_at)}" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    Some(Err(e)) => rsx! {
                        div { class: "load-error",
                            "{shared_types::AppError::friendly_message(&e.to_string())}"
                        }
                    },
                    None => rsx! {
                        p { class: "page-loading", "Loading recent applications..." }
                    },
                }
            }
        }
    }
}
