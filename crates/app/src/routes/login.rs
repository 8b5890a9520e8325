use dioxus::prelude::*;
use std::collections::HashMap;

use crate::auth::{home_route, use_session};
use crate::routes::Route;

/// Login page. Accepts an optional `redirect` query param recorded by
/// the route guard; after login, navigates there instead of the role's
/// home page. The value is parsed back into a typed [`Route`], so it
/// can only ever name a page inside the app.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Store redirect in a signal so closures can read it without moving ownership.
    let redirect_target = use_signal(move || redirect);

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::login(email(), password()).await {
            Ok(user) => {
                let role = user.role;
                session.set_user(user);
                let target = redirect_target
                    .read()
                    .as_deref()
                    .and_then(|path| path.parse::<Route>().ok());
                match target {
                    Some(route) => navigator().push(route),
                    None => navigator().push(home_route(role)),
                };
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

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Sign in" }
                p { class: "auth-subtitle", "Access your JobBridge account" }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_login,
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
                            value: password(),
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "button",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p { class: "auth-switch",
                    "No account yet? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
