use dioxus::prelude::*;
use shared_types::{RegisterRequest, Role};
use std::collections::HashMap;

use crate::auth::{home_route, use_session};
use crate::routes::Route;

/// Registration page for STUDENT and COMPANY accounts. Admin accounts
/// are provisioned out of band and cannot be registered here.
#[component]
pub fn Register() -> Element {
    let mut session = use_session();
    let mut role = use_signal(|| Role::Student);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let body = RegisterRequest {
            email: email(),
            password: password(),
            role: role(),
            full_name: (role() == Role::Student).then(|| name()),
            company_name: (role() == Role::Company).then(|| name()),
        };

        match server::api::register(body).await {
            Ok(user) => {
                let role = user.role;
                session.set_user(user);
                navigator().push(home_route(role));
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = shared_types::AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(shared_types::AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    let name_label = if role() == Role::Company { "Company name" } else { "Full name" };
    let name_error_key = if role() == Role::Company { "companyName" } else { "fullName" };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Create an account" }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_register,
                    div { class: "field",
                        label { "I am a" }
                        div { class: "radio-row",
                            label {
                                input {
                                    r#type: "radio",
                                    name: "role",
                                    checked: role() == Role::Student,
                                    onchange: move |_| role.set(Role::Student),
                                }
                                "Student"
                            }
                            label {
                                input {
                                    r#type: "radio",
                                    name: "role",
                                    checked: role() == Role::Company,
                                    onchange: move |_| role.set(Role::Company),
                                }
                                "Company"
                            }
                        }
                    }
                    div { class: "field",
                        label { r#for: "name", "{name_label}" }
                        input {
                            id: "name",
                            value: name(),
                            oninput: move |e| name.set(e.value()),
                        }
                        if let Some(err) = field_errors().get(name_error_key) {
                            span { class: "field-error", "{err}" }
                        }
                    }
                    div { class: "field",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            value: email(),
                            oninput: move |e| email.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("email") {
                            span { class: "field-error", "{err}" }
                        }
                    }
                    div { class: "field",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "At least 8 characters",
                            value: password(),
                            oninput: move |e| password.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("password") {
                            span { class: "field-error", "{err}" }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "button",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Register" }
                    }
                }

                p { class: "auth-switch",
                    "Already registered? "
                    Link { to: Route::Login { redirect: None }, "Sign in" }
                }
            }
        }
    }
}
