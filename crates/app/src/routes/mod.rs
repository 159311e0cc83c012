pub mod home;
pub mod not_found;
pub mod submit_claim;

use dioxus::prelude::*;

use home::Home;
use not_found::NotFound;
use submit_claim::SubmitClaim;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/submit-claim")]
    SubmitClaim {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
