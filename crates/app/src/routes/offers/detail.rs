use dioxus::prelude::*;
use shared_types::{Role, SubmitApplicationRequest};

use crate::auth::use_session;
use crate::format_helpers::format_date_human;
use crate::routes::Route;

/// Public offer detail. Students see an application form; everyone else
/// sees the posting read-only.
#[component]
pub fn OfferDetail(id: String) -> Element {
    let session = use_session();
    let offer_id = use_signal(move || id);

    let offer = use_server_future(move || {
        let id = offer_id.read().clone();
        async move { server::api::get_offer(id).await }
    })?;

    let result = offer.read().as_ref().cloned();

    rsx! {
        div { class: "offer-detail",
            match result {
                Some(Ok(offer)) => rsx! {
                    h1 { "{offer.title}" }
                    p { class: "offer-company", "{offer.company_name}" }
                    p { class: "offer-meta",
                        span { "{offer.location}" }
                        span { "{offer.sector}" }
                        span { "{offer.offer_type}" }
                        span { "{offer.duration}" }
                        span { "Posted {format_date_human(&offer.created_at)}" }
                    }
                    section {
                        h2 { "Description" }
                        p { "{offer.description}" }
                    }
                    section {
                        h2 { "Requirements" }
                        p { "{offer.requirements}" }
                    }
                    if session.role() == Some(Role::Student) {
                        ApplyForm { offer_id: offer.id.clone() }
                    } else if !session.is_authenticated() {
                        p { class: "apply-hint",
                            Link { to: Route::Login { redirect: None }, "Sign in" }
                            " as a student to apply to this offer."
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "load-error",
                        "{shared_types::AppError::friendly_message(&e.to_string())}"
                    }
                },
                None => rsx! {
                    p { class: "page-loading", "Loading offer..." }
                },
            }
        }
    }
}

#[component]
fn ApplyForm(offer_id: String) -> Element {
    let mut cv = use_signal(String::new);
    let mut cover_letter = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut submitted = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let offer_id = use_signal(move || offer_id);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        let body = SubmitApplicationRequest {
            offer_id: match offer_id.read().parse() {
                Ok(id) => id,
                Err(_) => {
                    error_msg.set(Some("Invalid offer reference".to_string()));
                    loading.set(false);
                    return;
                }
            },
            cv: cv(),
            cover_letter: Some(cover_letter()).filter(|c| !c.trim().is_empty()),
        };

        match server::api::submit_application(body).await {
            Ok(_) => submitted.set(true),
            Err(e) => {
                error_msg.set(Some(shared_types::AppError::friendly_message(&e.to_string())));
            }
        }
        loading.set(false);
    };

    if submitted() {
        return rsx! {
            div { class: "apply-success",
                p { "Your application has been submitted." }
                Link { to: Route::MyApplications {}, "Track it in My applications" }
            }
        };
    }

    rsx! {
        section { class: "apply-form",
            h2 { "Apply to this offer" }
            if let Some(err) = error_msg() {
                div { class: "form-error", "{err}" }
            }
            form { onsubmit: handle_submit,
                div { class: "field",
                    label { r#for: "cv", "CV (link to the document)" }
                    input {
                        id: "cv",
                        placeholder: "https://...",
                        value: cv(),
                        oninput: move |e| cv.set(e.value()),
                    }
                }
                div { class: "field",
                    label { r#for: "cover_letter", "Cover letter (optional link)" }
                    input {
                        id: "cover_letter",
                        placeholder: "https://...",
                        value: cover_letter(),
                        oninput: move |e| cover_letter.set(e.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "button",
                    disabled: loading(),
                    if loading() { "Submitting..." } else { "Submit application" }
                }
            }
        }
    }
}
