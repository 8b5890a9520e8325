use dioxus::prelude::*;
use shared_types::UpdateCompanyProfileRequest;

use crate::auth::use_session;

/// The company's own profile, editable in place. The company name shown
/// on offers is copied at publication time, so renaming here only
/// affects future postings.
#[component]
pub fn CompanyProfilePage() -> Element {
    let session = use_session();

    let profile = use_server_future(move || {
        let id = session.user_id().unwrap_or_default();
        async move { server::api::get_company_profile(id).await }
    })?;

    let mut company_name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut website = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut contact_email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut saved = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let mut prefilled = use_signal(|| false);
    use_effect(move || {
        if prefilled() {
            return;
        }
        if let Some(Ok(p)) = profile.read().as_ref() {
            company_name.set(p.company_name.clone());
            description.set(p.description.clone());
            website.set(p.website.clone());
            location.set(p.location.clone());
            contact_email.set(p.contact_email.clone());
            phone.set(p.phone.clone());
            prefilled.set(true);
        }
    });

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        saved.set(false);

        let body = UpdateCompanyProfileRequest {
            company_name: Some(company_name()),
            description: Some(description()),
            website: Some(website()),
            location: Some(location()),
            contact_email: Some(contact_email()),
            phone: Some(phone()),
        };

        match server::api::update_my_company_profile(body).await {
            Ok(updated) => {
                company_name.set(updated.company_name);
                description.set(updated.description);
                website.set(updated.website);
                location.set(updated.location);
                contact_email.set(updated.contact_email);
                phone.set(updated.phone);
                saved.set(true);
            }
            Err(e) => {
                error_msg.set(Some(shared_types::AppError::friendly_message(&e.to_string())));
            }
        }
        loading.set(false);
    };

    rsx! {
        div { class: "profile-page",
            h1 { "Company profile" }

            if let Some(err) = error_msg() {
                div { class: "form-error", "{err}" }
            }
            if saved() {
                div { class: "form-success", "Profile saved." }
            }

            form { onsubmit: handle_submit,
                div { class: "field",
                    label { r#for: "company_name", "Company name" }
                    input {
                        id: "company_name",
                        value: company_name(),
                        oninput: move |e| company_name.set(e.value()),
                    }
                }
                div { class: "field",
                    label { r#for: "description", "Description" }
                    textarea {
                        id: "description",
                        rows: 4,
                        value: description(),
                        oninput: move |e| description.set(e.value()),
                    }
                }
                div { class: "field-row",
                    div { class: "field",
                        label { r#for: "website", "Website" }
                        input {
                            id: "website",
                            value: website(),
                            oninput: move |e| website.set(e.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: "location", "Location" }
                        input {
                            id: "location",
                            value: location(),
                            oninput: move |e| location.set(e.value()),
                        }
                    }
                }
                div { class: "field-row",
                    div { class: "field",
                        label { r#for: "contact_email", "Contact email" }
                        input {
                            id: "contact_email",
                            value: contact_email(),
                            oninput: move |e| contact_email.set(e.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: "phone", "Phone" }
                        input {
                            id: "phone",
                            value: phone(),
                            oninput: move |e| phone.set(e.value()),
                        }
                    }
                }
                button {
                    r#type: "submit",
                    class: "button",
                    disabled: loading(),
                    if loading() { "Saving..." } else { "Save profile" }
                }
            }
        }
    }
}
