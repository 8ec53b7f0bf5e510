use dioxus::prelude::*;

#[component]
pub fn Notification(message: String, ondismiss: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "notification is-danger is-light",
            role: "alert",
            button {
                class: "delete",
                "type": "button",
                onclick: move |evt| ondismiss.call(evt),
            }
            "{message}"
        }
    }
}
