use dioxus::prelude::*;
use shared_types::{ApplicationStatus, ApplicationWithOfferResponse};

use crate::format_helpers::format_date_human;
use crate::routes::Route;

/// The student's applications, each with its offer. Withdrawal is the
/// only move a student may make; a successful one patches the row in
/// place, no refetch.
#[component]
pub fn MyApplications() -> Element {
    let resource =
        use_server_future(move || async move { server::api::list_my_applications().await })?;

    let mut rows = use_signal(Vec::<ApplicationWithOfferResponse>::new);
    let mut loaded = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    use_effect(move || {
        if loaded() {
            return;
        }
        if let Some(Ok(list)) = resource.read().as_ref() {
            rows.set(list.clone());
            loaded.set(true);
        }
    });

    let mut handle_withdraw = move |id: String| {
        spawn(async move {
            error_msg.set(None);
            match server::api::set_application_status(
                id.clone(),
                ApplicationStatus::Withdrawn.as_str().to_string(),
            )
            .await
            {
                Ok(updated) => {
                    let mut list = rows.write();
                    if let Some(row) = list.iter_mut().find(|r| r.application.id == id) {
                        row.application = updated;
                    }
                }
                Err(e) => {
                    error_msg.set(Some(shared_types::AppError::friendly_message(&e.to_string())));
                }
            }
        });
    };

    let load_failed = matches!(resource.read().as_ref(), Some(Err(_)));

    rsx! {
        div { class: "my-applications",
            h1 { "My applications" }

            if let Some(err) = error_msg() {
                div { class: "form-error", "{err}" }
            }

            if load_failed {
                div { class: "load-error", "Could not load your applications." }
            } else if loaded() && rows.read().is_empty() {
                p { class: "empty-state",
                    "You have not applied to anything yet. "
                    Link { to: Route::OfferDirectory {}, "Browse the directory" }
                }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Offer" }
                            th { "Company" }
                            th { "Submitted" }
                            th { "Status" }
                            th { "" }
                        }
                    }
                    tbody {
                        for row in rows() {
                            tr { key: "{row.application.id}",
                                td {
                                    Link { to: Route::OfferDetail { id: row.offer.id.clone() },
                                        "{row.offer.title}"
                                    }
                                }
                                td { "{row.offer.company_name}" }
                                td { "{format_date_human(&row.application.submitted_at)}" }
                                td {
                                    span { class: "status status-{row.application.status}",
                                        "{row.application.status.label()}"
                                    }
                                }
                                td {
                                    if !row.application.status.is_terminal() {
                                        button {
                                            class: "link-button danger",
                                            onclick: {
                                                let id = row.application.id.clone();
                                                move |_| handle_withdraw(id.clone())
                                            },
                                            "Withdraw"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
