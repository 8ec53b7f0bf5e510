use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
}

impl InputKind {
    fn as_type(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
        }
    }
}

#[component]
pub fn TextInput(
    oninput: EventHandler<FormEvent>,
    value: ReadOnlySignal<String>,
    kind: Option<InputKind>,
    placeholder: Option<String>,
    disabled: Option<bool>,
) -> Element {
    let typ = kind.unwrap_or(InputKind::Text).as_type();
    let placeholder = placeholder.unwrap_or_default();

    rsx! {
        div {
            class: "field is-expanded",
            div {
                class: "control",
                input {
                    class: "input",
                    value: "{value}",
                    "type": typ,
                    placeholder: "{placeholder}",
                    disabled: disabled.unwrap_or(false),
                    oninput: move |evt| oninput.call(evt),
                }
            }
        }
    }
}

/// A select whose first entry is an unselectable prompt. `value` indexes into `options`; `None`
/// leaves the prompt showing.
#[component]
pub fn SelectInput(
    onchange: EventHandler<FormEvent>,
    options: ReadOnlySignal<Vec<String>>,
    #[props(!optional)] value: Option<usize>,
    prompt: String,
    disabled: Option<bool>,
) -> Element {
    rsx! {
        div {
            class: "select is-fullwidth",
            select {
                disabled: disabled.unwrap_or(false),
                onchange: move |evt| onchange.call(evt),
                option {
                    value: "",
                    disabled: true,
                    selected: value.is_none(),
                    "{prompt}"
                }
                { options.iter().enumerate().map(|(idx, v)| {
                    let selected = value == Some(idx);
                    rsx!(
                        option {
                            selected: selected,
                            key: "{idx}",
                            value: "{idx}",
                            "{v}"
                        }
                    )
                })}
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonFlavor {
    Info,
    Success,
}

#[component]
pub fn Button(
    onclick: EventHandler<MouseEvent>,
    flavor: Option<ButtonFlavor>,
    disabled: Option<bool>,
    is_loading: Option<bool>,
    children: Element,
) -> Element {
    let mut class = "button".to_owned();

    match flavor {
        None => {}
        Some(ButtonFlavor::Info) => class.push_str(" is-info"),
        Some(ButtonFlavor::Success) => class.push_str(" is-success"),
    };

    if matches!(is_loading, Some(true)) {
        class.push_str(" is-loading");
    }

    rsx! {
         button {
             class: "{class}",
             disabled: disabled,
             "type": "button",
             onclick: move |evt| onclick.call(evt),
             { children }
         }
    }
}

#[component]
pub fn Field(label: ReadOnlySignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "field is-horizontal",
            div {
                class: "field-label is-normal",
                label {
                    class: "label",
                    "{label}"
                }
            }
            div {
                class: "field-body",
                { children }
            }
        }
    }
}
