use dioxus::prelude::*;

use crate::view::components::page::Page as GenericPage;

#[component]
pub fn Page() -> Element {
    rsx! {
        GenericPage {
            title: "Event Registration".to_owned(),
            subtitle: "Follow the registration link shared by your event organizer.".to_owned(),
        }
    }
}
