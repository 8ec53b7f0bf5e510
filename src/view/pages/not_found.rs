use dioxus::prelude::*;

use crate::view::components::page::StatusPage;

#[component]
pub fn Page(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!("no route for {}", path);
    let message = format!("There is nothing at {}.", path);

    rsx! {
        StatusPage {
            title: "Page Not Found".to_owned(),
            message: message,
        }
    }
}
