use dioxus::prelude::*;

use crate::{api::HttpClient, config::Config};

pub mod registration;

pub fn use_api_provider(config: Config) {
    use_context_provider(move || HttpClient::new(config));
}

pub fn use_api() -> HttpClient {
    use_context::<HttpClient>()
}
