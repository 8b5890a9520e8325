use dioxus::prelude::*;
use shared_types::{OfferFilter, OFFER_TYPES, SECTORS};

use crate::format_helpers::format_date_human;
use crate::routes::Route;

/// The public offer directory. The whole list is fetched once; the
/// filter is re-evaluated client-side on every input change, no
/// debouncing and no server round-trip.
#[component]
pub fn OfferDirectory() -> Element {
    let offers = use_server_future(move || async move { server::api::list_offers().await })?;

    let mut query = use_signal(String::new);
    let mut sector = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut duration = use_signal(String::new);
    let mut offer_type = use_signal(String::new);

    let filter = use_memo(move || OfferFilter {
        query: query(),
        sector: sector(),
        location: location(),
        duration: duration(),
        offer_type: offer_type(),
    });

    let result = offers.read().as_ref().cloned();

    rsx! {
        div { class: "offer-directory",
            h1 { "Internship & job offers" }

            div { class: "filter-bar",
                input {
                    class: "filter-query",
                    placeholder: "Search title, company or description...",
                    value: query(),
                    oninput: move |e| query.set(e.value()),
                }
                select {
                    value: sector(),
                    onchange: move |e| sector.set(e.value()),
                    option { value: "", "All sectors" }
                    for s in SECTORS {
                        option { value: *s, "{s}" }
                    }
                }
                input {
                    placeholder: "Location",
                    value: location(),
                    oninput: move |e| location.set(e.value()),
                }
                input {
                    placeholder: "Duration",
                    value: duration(),
                    oninput: move |e| duration.set(e.value()),
                }
                select {
                    value: offer_type(),
                    onchange: move |e| offer_type.set(e.value()),
                    option { value: "", "All types" }
                    for t in OFFER_TYPES {
                        option { value: *t, "{t}" }
                    }
                }
            }

            match result {
                Some(Ok(all_offers)) => {
                    let visible: Vec<_> = all_offers
                        .iter()
                        .filter(|o| filter.read().matches(o))
                        .cloned()
                        .collect();
                    rsx! {
                        p { class: "result-count",
                            "{visible.len()} of {all_offers.len()} offers"
                        }
                        if visible.is_empty() {
                            p { class: "empty-state", "No offers match the current filters." }
                        }
                        div { class: "offer-cards",
                            for offer in visible {
                                Link {
                                    class: "offer-card",
                                    to: Route::OfferDetail { id: offer.id.clone() },
                                    h2 { "{offer.title}" }
                                    p { class: "offer-company", "{offer.company_name}" }
                                    p { class: "offer-meta",
                                        span { "{offer.location}" }
                                        span { "{offer.sector}" }
                                        span { "{offer.offer_type}" }
                                        span { "{offer.duration}" }
                                    }
                                    p { class: "offer-date",
                                        "Posted {format_date_human(&offer.created_at)}"
                                    }
                                }
                            }
                        }
                    }
                }
                Some(Err(e)) => rsx! {
                    div { class: "load-error",
                        "Could not load offers: {shared_types::AppError::friendly_message(&e.to_string())}"
                    }
                },
                None => rsx! {
                    p { class: "page-loading", "Loading offers..." }
                },
            }
        }
    }
}
