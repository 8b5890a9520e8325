use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    rsx! {
        div { class: "not-found",
            h1 { "Page not found" }
            p { "No page exists at /{route.join(\"/\")}" }
            Link { to: Route::OfferDirectory {}, "Back to the offer directory" }
        }
    }
}
