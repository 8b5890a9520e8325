use dioxus::prelude::*;

use crate::format_helpers::format_date_human;
use crate::routes::Route;

/// The company's own postings, with edit/review/delete actions.
/// Deletion is refused by the server while applications reference the
/// offer; the conflict message is surfaced as-is.
#[component]
pub fn CompanyOffers() -> Element {
    let mut offers = use_server_future(move || async move { server::api::list_my_offers().await })?;

    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut confirm_delete = use_signal(|| Option::<String>::None);

    let result = offers.read().as_ref().cloned();

    let mut handle_delete = move |id: String| {
        spawn(async move {
            error_msg.set(None);
            match server::api::delete_offer(id).await {
                Ok(()) => {
                    confirm_delete.set(None);
                    offers.restart();
                }
                Err(e) => {
                    confirm_delete.set(None);
                    error_msg.set(Some(shared_types::AppError::friendly_message(&e.to_string())));
                }
            }
        });
    };

    rsx! {
        div { class: "company-offers",
            div { class: "page-header",
                h1 { "My offers" }
                Link { class: "button", to: Route::OfferNew {}, "New offer" }
            }

            if let Some(err) = error_msg() {
                div { class: "form-error", "{err}" }
            }

            match result {
                Some(Ok(list)) => rsx! {
                    if list.is_empty() {
                        p { class: "empty-state", "You have not published any offers yet." }
                    }
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Title" }
                                th { "Sector" }
                                th { "Type" }
                                th { "Posted" }
                                th { "" }
                            }
                        }
                        tbody {
                            for offer in list {
                                tr { key: "{offer.id}",
                                    td {
                                        Link { to: Route::OfferDetail { id: offer.id.clone() },
                                            "{offer.title}"
                                        }
                                    }
                                    td { "{offer.sector}" }
                                    td { "{offer.offer_type}" }
                                    td { "{format_date_human(&offer.created_at)}" }
                                    td { class: "row-actions",
                                        Link {
                                            to: Route::OfferApplications { id: offer.id.clone() },
                                            "Applications"
                                        }
                                        Link {
                                            to: Route::OfferEdit { id: offer.id.clone() },
                                            "Edit"
                                        }
                                        if confirm_delete() == Some(offer.id.clone()) {
                                            button {
                                                class: "link-button danger",
                                                onclick: {
                                                    let id = offer.id.clone();
                                                    move |_| handle_delete(id.clone())
                                                },
                                                "Confirm delete"
                                            }
                                            button {
                                                class: "link-button",
                                                onclick: move |_| confirm_delete.set(None),
                                                "Cancel"
                                            }
                                        } else {
                                            button {
                                                class: "link-button danger",
                                                onclick: {
                                                    let id = offer.id.clone();
                                                    move |_| confirm_delete.set(Some(id.clone()))
                                                },
                                                "Delete"
                                            }
                                        }
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
                    p { class: "page-loading", "Loading your offers..." }
                },
            }
        }
    }
}
