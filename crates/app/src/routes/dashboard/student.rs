use dioxus::prelude::*;
use shared_types::ApplicationStatus;

use crate::routes::Route;

/// Student home: counts composed client-side from the caller's own
/// applications, one fetch, no dedicated stats endpoint.
#[component]
pub fn StudentDashboard() -> Element {
    let resource =
        use_server_future(move || async move { server::api::list_my_applications().await })?;

    let result = resource.read().as_ref().cloned();

    rsx! {
        div { class: "student-dashboard",
            div { class: "page-header",
                h1 { "Dashboard" }
                Link { class: "button", to: Route::OfferDirectory {}, "Browse offers" }
            }

            match result {
                Some(Ok(rows)) => {
                    let total = rows.len();
                    let active = rows
                        .iter()
                        .filter(|r| !r.application.status.is_terminal())
                        .count();
                    rsx! {
                        div { class: "stat-cards",
                            div { class: "stat-card",
                                span { class: "stat-value", "{total}" }
                                span { class: "stat-label", "Applications sent" }
                            }
                            div { class: "stat-card",
                                span { class: "stat-value", "{active}" }
                                span { class: "stat-label", "In progress" }
                            }
                        }
                        section { class: "status-breakdown",
                            h2 { "By status" }
                            table { class: "data-table",
                                tbody {
                                    for status in ApplicationStatus::all() {
                                        tr { key: "{status}",
                                            td {
                                                span { class: "status status-{status}", "{status.label()}" }
                                            }
                                            td { class: "stat-count",
                                                "{rows.iter().filter(|r| r.application.status == *status).count()}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        p {
                            Link { to: Route::MyApplications {}, "See my applications" }
                        }
                    }
                }
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
