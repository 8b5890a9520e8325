use dioxus::prelude::*;
use shared_types::UpdateStudentProfileRequest;

use crate::auth::use_session;

/// The student's own profile, editable in place.
#[component]
pub fn StudentProfilePage() -> Element {
    let session = use_session();

    let profile = use_server_future(move || {
        let id = session.user_id().unwrap_or_default();
        async move { server::api::get_student_profile(id).await }
    })?;

    let mut full_name = use_signal(String::new);
    let mut address = use_signal(String::new);
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
            full_name.set(p.full_name.clone());
            address.set(p.address.clone());
            phone.set(p.phone.clone());
            prefilled.set(true);
        }
    });

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        saved.set(false);

        let body = UpdateStudentProfileRequest {
            full_name: Some(full_name()),
            address: Some(address()),
            phone: Some(phone()),
        };

        match server::api::update_my_student_profile(body).await {
            Ok(updated) => {
                full_name.set(updated.full_name);
                address.set(updated.address);
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
            h1 { "My profile" }

            if let Some(err) = error_msg() {
                div { class: "form-error", "{err}" }
            }
            if saved() {
                div { class: "form-success", "Profile saved." }
            }

            form { onsubmit: handle_submit,
                div { class: "field",
                    label { r#for: "full_name", "Full name" }
                    input {
                        id: "full_name",
                        value: full_name(),
                        oninput: move |e| full_name.set(e.value()),
                    }
                }
                div { class: "field",
                    label { r#for: "address", "Address" }
                    input {
                        id: "address",
                        value: address(),
                        oninput: move |e| address.set(e.value()),
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
