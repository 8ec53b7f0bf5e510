use dioxus::prelude::*;

use crate::view::app::Routes;

#[component]
pub fn Page(
    title: String,
    subtitle: Option<String>,
    image: Option<String>,
    children: Element,
) -> Element {
    let subtitle = subtitle.map(|subtitle| {
        rsx! {
            p {
                class: "subtitle",
                "{subtitle}"
            }
        }
    });

    let image = image.map(|image| {
        rsx! {
            figure {
                class: "image mb-5",
                img {
                    src: "{image}",
                    alt: "{title}",
                    style: "max-height: 320px; object-fit: cover;",
                }
            }
        }
    });

    rsx! {
        section {
            class: "section",
            div {
                class: "container",
                style: "max-width: 720px;",
                { image }
                h1 {
                    class: "title is-2",
                    "{title}"
                }
                { subtitle }
                { children }
            }
        }
    }
}

/// A full page message with a way back to the landing page.
#[component]
pub fn StatusPage(title: String, message: String, flavor: Option<String>) -> Element {
    let flavor = flavor.unwrap_or_else(|| "is-warning".to_owned());

    rsx! {
        Page {
            title: title,
            div {
                class: "notification {flavor}",
                role: "alert",
                p {
                    "{message}"
                }
            }
            Link {
                class: "button is-link",
                to: Routes::LandingPage,
                "Go Home"
            }
        }
    }
}
