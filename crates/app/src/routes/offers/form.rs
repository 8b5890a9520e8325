use dioxus::prelude::*;
use shared_types::{CreateOfferRequest, UpdateOfferRequest, OFFER_TYPES, SECTORS};

use crate::routes::Route;

/// Create a new offer.
#[component]
pub fn OfferNew() -> Element {
    rsx! {
        OfferForm { offer_id: None }
    }
}

/// Edit an existing offer.
#[component]
pub fn OfferEdit(id: String) -> Element {
    rsx! {
        OfferForm { offer_id: Some(id) }
    }
}

/// Shared create/edit form. On edit, the current values are loaded
/// before the form renders.
#[component]
fn OfferForm(offer_id: Option<String>) -> Element {
    let editing = offer_id.is_some();
    let offer_id = use_signal(move || offer_id);

    let mut title = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut sector = use_signal(String::new);
    let mut duration = use_signal(String::new);
    let mut offer_type = use_signal(|| "stage".to_string());
    let mut description = use_signal(String::new);
    let mut requirements = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Pre-fill from the existing offer when editing.
    let existing = use_server_future(move || {
        let id = offer_id.read().clone();
        async move {
            match id {
                Some(id) => server::api::get_offer(id).await.map(Some),
                None => Ok(None),
            }
        }
    })?;

    let mut prefilled = use_signal(|| false);
    use_effect(move || {
        if prefilled() {
            return;
        }
        if let Some(Ok(Some(offer))) = existing.read().as_ref() {
            title.set(offer.title.clone());
            location.set(offer.location.clone());
            sector.set(offer.sector.clone());
            duration.set(offer.duration.clone());
            offer_type.set(offer.offer_type.clone());
            description.set(offer.description.clone());
            requirements.set(offer.requirements.clone());
            prefilled.set(true);
        }
    });

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        let result = match offer_id.read().clone() {
            Some(id) => {
                let body = UpdateOfferRequest {
                    title: Some(title()),
                    location: Some(location()),
                    sector: Some(sector()),
                    duration: Some(duration()),
                    offer_type: Some(offer_type()),
                    description: Some(description()),
                    requirements: Some(requirements()),
                };
                server::api::update_offer(id, body).await
            }
            None => {
                let body = CreateOfferRequest {
                    title: title(),
                    location: location(),
                    sector: sector(),
                    duration: duration(),
                    offer_type: offer_type(),
                    description: description(),
                    requirements: requirements(),
                };
                server::api::create_offer(body).await
            }
        };

        match result {
            Ok(_) => {
                navigator().push(Route::CompanyOffers {});
            }
            Err(e) => {
                error_msg.set(Some(shared_types::AppError::friendly_message(&e.to_string())));
            }
        }
        loading.set(false);
    };

    rsx! {
        div { class: "offer-form",
            h1 { if editing { "Edit offer" } else { "New offer" } }

            if let Some(err) = error_msg() {
                div { class: "form-error", "{err}" }
            }

            form { onsubmit: handle_submit,
                div { class: "field",
                    label { r#for: "title", "Title" }
                    input {
                        id: "title",
                        value: title(),
                        oninput: move |e| title.set(e.value()),
                    }
                }
                div { class: "field-row",
                    div { class: "field",
                        label { r#for: "location", "Location" }
                        input {
                            id: "location",
                            value: location(),
                            oninput: move |e| location.set(e.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: "duration", "Duration" }
                        input {
                            id: "duration",
                            placeholder: "6 mois",
                            value: duration(),
                            oninput: move |e| duration.set(e.value()),
                        }
                    }
                }
                div { class: "field-row",
                    div { class: "field",
                        label { r#for: "sector", "Sector" }
                        select {
                            id: "sector",
                            value: sector(),
                            onchange: move |e| sector.set(e.value()),
                            option { value: "", "Select a sector" }
                            for s in SECTORS {
                                option { value: *s, "{s}" }
                            }
                        }
                    }
                    div { class: "field",
                        label { r#for: "offer_type", "Type" }
                        select {
                            id: "offer_type",
                            value: offer_type(),
                            onchange: move |e| offer_type.set(e.value()),
                            for t in OFFER_TYPES {
                                option { value: *t, "{t}" }
                            }
                        }
                    }
                }
                div { class: "field",
                    label { r#for: "description", "Description" }
                    textarea {
                        id: "description",
                        rows: 6,
                        value: description(),
                        oninput: move |e| description.set(e.value()),
                    }
                }
                div { class: "field",
                    label { r#for: "requirements", "Requirements" }
                    textarea {
                        id: "requirements",
                        rows: 4,
                        value: requirements(),
                        oninput: move |e| requirements.set(e.value()),
                    }
                }
                div { class: "form-actions",
                    button {
                        r#type: "submit",
                        class: "button",
                        disabled: loading(),
                        if loading() { "Saving..." } else if editing { "Save changes" } else { "Publish offer" }
                    }
                    Link { to: Route::CompanyOffers {}, "Cancel" }
                }
            }
        }
    }
}
