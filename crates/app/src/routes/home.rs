use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant};

use crate::routes::Route;

/// Landing page: one card pointing at the complaint wizard.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-page",
            div { class: "home-card",
                h1 { "Parental Rights Portal" }
                p {
                    "File a complaint about a parental-rights violation. "
                    "The form takes a few minutes and supporting documents can be attached."
                }
                Link { to: Route::SubmitClaim {},
                    Button { variant: ButtonVariant::Primary, "File a Complaint" }
                }
            }
        }
    }
}
