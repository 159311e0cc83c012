use dioxus::prelude::*;

use crate::routes::Route;

/// 404 Not Found page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "not-found-page",
            div { class: "not-found-code", "404" }
            h1 { "Page Not Found" }
            p {
                "The page "
                code { "{path}" }
                " could not be found."
            }
            Link { to: Route::Home {}, "Back to Home" }
        }
    }
}
