fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");

    #[cfg(feature = "web")]
    dioxus::launch(event_registration::view::app::App);
}
