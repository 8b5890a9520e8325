use dioxus::prelude::*;
use shared_types::{ApplicationResponse, ApplicationStatus};

use crate::format_helpers::format_date_human;
use crate::routes::Route;

/// Review queue for one offer. Each row offers exactly the moves its
/// current status allows; a successful transition replaces the row in
/// place with the server's response.
#[component]
pub fn OfferApplications(id: String) -> Element {
    let offer_id = use_signal(move || id);

    let offer = use_server_future(move || {
        let id = offer_id.read().clone();
        async move { server::api::get_offer(id).await }
    })?;
    let resource = use_server_future(move || {
        let id = offer_id.read().clone();
        async move { server::api::list_offer_applications(id).await }
    })?;

    let mut rows = use_signal(Vec::<ApplicationResponse>::new);
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

    let mut handle_transition = move |id: String, target: ApplicationStatus| {
        spawn(async move {
            error_msg.set(None);
            match server::api::set_application_status(id, target.as_str().to_string()).await {
                Ok(updated) => {
                    let mut list = rows.write();
                    if let Some(row) = list.iter_mut().find(|r| r.id == updated.id) {
                        *row = updated;
                    }
                }
                Err(e) => {
                    error_msg.set(Some(shared_types::AppError::friendly_message(&e.to_string())));
                }
            }
        });
    };

    let offer_title = match offer.read().as_ref() {
        Some(Ok(offer)) => offer.title.clone(),
        _ => String::new(),
    };
    let load_failed = matches!(resource.read().as_ref(), Some(Err(_)))
        || matches!(offer.read().as_ref(), Some(Err(_)));

    rsx! {
        div { class: "offer-applications",
            div { class: "page-header",
                h1 { "Applications — {offer_title}" }
                Link { to: Route::CompanyOffers {}, "Back to my offers" }
            }

            if let Some(err) = error_msg() {
                div { class: "form-error", "{err}" }
            }

            if load_failed {
                div { class: "load-error", "Could not load the applications for this offer." }
            } else if loaded() && rows.read().is_empty() {
                p { class: "empty-state", "No applications for this offer yet." }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Submitted" }
                            th { "CV" }
                            th { "Cover letter" }
                            th { "Status" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for row in rows() {
                            tr { key: "{row.id}",
                                td { "{format_date_human(&row.submitted_at)}" }
                                td {
                                    a { href: "{row.cv}", target: "_blank", "View CV" }
                                }
                                td {
                                    if let Some(letter) = &row.cover_letter {
                                        a { href: "{letter}", target: "_blank", "View" }
                                    } else {
                                        span { class: "muted", "—" }
                                    }
                                }
                                td {
                                    span { class: "status status-{row.status}",
                                        "{row.status.label()}"
                                    }
                                }
                                td { class: "row-actions",
                                    for target in row.status.allowed_transitions() {
                                        button {
                                            class: "link-button",
                                            onclick: {
                                                let id = row.id.clone();
                                                let target = *target;
                                                move |_| handle_transition(id.clone(), target)
                                            },
                                            "{target.label()}"
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
