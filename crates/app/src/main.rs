use dioxus::prelude::*;

mod auth;
mod format_helpers;
mod routes;

use auth::SessionState;
use routes::Route;

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_settings();
        let settings = server::config::settings();
        // Dioxus reads the bind address from the environment.
        std::env::set_var("IP", &settings.bind_addr);
        std::env::set_var("PORT", settings.port.to_string());

        server::health::record_start_time();

        let pool = server::db::create_pool();
        server::db::run_migrations(&pool).await;

        let router = dioxus::server::router(App)
            .merge(server::openapi::api_router(pool))
            .layer(axum::middleware::from_fn(
                server::auth::middleware::auth_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));

        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SessionState::new);

    rsx! {
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "page-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
