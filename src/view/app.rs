use dioxus::prelude::*;

use crate::{
    config::Config,
    hooks::use_api_provider,
    view::pages::{
        landing::Page as LandingPage, not_found::Page as NotFound,
        registration::Page as RegistrationPage,
    },
};

#[component]
pub fn App() -> Element {
    use_api_provider(Config::default());

    rsx! {
        Router::<Routes>{}
    }
}

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Routes {
    #[route("/")]
    LandingPage,

    #[route("/:company_name/:event_id")]
    RegistrationPage {
        company_name: String,
        event_id: String,
    },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
