use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::{
    hooks::registration::{use_registration, Registration},
    model::{Gender, Status},
    state::{FieldUpdate, View},
    view::components::{
        form::{Button, ButtonFlavor, Field, InputKind, SelectInput, TextInput},
        notification::Notification,
        page::{Page as GenericPage, StatusPage},
    },
};

#[component]
pub fn Page(company_name: ReadOnlySignal<String>, event_id: ReadOnlySignal<String>) -> Element {
    let registration = use_registration(company_name, event_id);
    let state = registration.state;

    let view = state.read().view();
    match view {
        View::Loading => rsx! {
            GenericPage {
                title: "Loading event...".to_owned(),
                progress {
                    class: "progress is-small is-primary",
                    max: "100",
                }
            }
        },
        View::Error(message) => rsx! {
            StatusPage {
                title: "Event Unavailable".to_owned(),
                message: message,
                flavor: "is-danger".to_owned(),
            }
        },
        View::EventDisabled => rsx! {
            StatusPage {
                title: "Registration Closed".to_owned(),
                message: "Registration for this event is currently closed.".to_owned(),
            }
        },
        View::CompanyDisabled => rsx! {
            StatusPage {
                title: "Registration Unavailable".to_owned(),
                message: "This organizer is not accepting registrations at the moment.".to_owned(),
            }
        },
        View::Form { success } => {
            let event_name = state.read().event_name.clone().unwrap_or_default();
            let image = state.read().event_image.clone();

            let body = if success {
                rsx! {
                    SuccessPanel {
                        registration: registration,
                        event_name: event_name.clone(),
                    }
                }
            } else {
                rsx! {
                    AttendeeForm {
                        registration: registration,
                    }
                }
            };

            rsx! {
                GenericPage {
                    title: event_name,
                    subtitle: "Register to attend".to_owned(),
                    image: image,
                    { body }
                }
            }
        }
    }
}

#[component]
fn SuccessPanel(registration: Registration, event_name: String) -> Element {
    rsx! {
        div {
            class: "notification is-success",
            h2 {
                class: "title is-4",
                "Registration Successful!"
            }
            p {
                "You are registered for {event_name}."
            }
        }
        Button {
            flavor: ButtonFlavor::Info,
            onclick: move |_| registration.register_another(),
            "Register Another Person"
        }
    }
}

#[component]
fn AttendeeForm(registration: Registration) -> Element {
    let submitting = registration.state.read().submitting;
    let form_error = registration.state.read().form_error.clone();
    let attendee = registration.state.read().form.clone();

    let genders = Gender::iter().map(|g| g.label().to_owned()).collect::<Vec<_>>();
    let statuses = Status::iter().map(|s| s.label().to_owned()).collect::<Vec<_>>();

    let gender = attendee
        .gender
        .and_then(|gender| Gender::iter().position(|g| g == gender));
    let status = attendee
        .status
        .and_then(|status| Status::iter().position(|s| s == status));

    let error = form_error.map(|message| {
        rsx! {
            Notification {
                message: message,
                ondismiss: move |_| registration.dismiss_error(),
            }
        }
    });

    rsx! {
        { error }
        form {
            onsubmit: move |e| {
                e.prevent_default();
                registration.submit();
            },
            Field {
                label: "Full Name",
                TextInput {
                    oninput: move |e: FormEvent| registration.edit(FieldUpdate::Name(e.value())),
                    value: attendee.name.clone(),
                    disabled: submitting,
                }
            }
            Field {
                label: "Phone",
                TextInput {
                    oninput: move |e: FormEvent| registration.edit(FieldUpdate::Phone(e.value())),
                    value: attendee.phone.clone(),
                    kind: InputKind::Tel,
                    placeholder: "10-15 digits".to_owned(),
                    disabled: submitting,
                }
            }
            Field {
                label: "Email",
                TextInput {
                    oninput: move |e: FormEvent| registration.edit(FieldUpdate::Email(e.value())),
                    value: attendee.email.clone(),
                    kind: InputKind::Email,
                    placeholder: "name@example.com".to_owned(),
                    disabled: submitting,
                }
            }
            Field {
                label: "Gender",
                SelectInput {
                    onchange: move |e: FormEvent| {
                        let gender = e.value().parse::<usize>().ok().and_then(|idx| Gender::iter().nth(idx));
                        registration.edit(FieldUpdate::Gender(gender));
                    },
                    options: genders,
                    value: gender,
                    prompt: "Select gender".to_owned(),
                    disabled: submitting,
                }
            }
            Field {
                label: "College",
                TextInput {
                    oninput: move |e: FormEvent| registration.edit(FieldUpdate::College(e.value())),
                    value: attendee.college.clone(),
                    disabled: submitting,
                }
            }
            Field {
                label: "Status",
                SelectInput {
                    onchange: move |e: FormEvent| {
                        let status = e.value().parse::<usize>().ok().and_then(|idx| Status::iter().nth(idx));
                        registration.edit(FieldUpdate::Status(status));
                    },
                    options: statuses,
                    value: status,
                    prompt: "Select status".to_owned(),
                    disabled: submitting,
                }
            }
            Field {
                label: "National ID",
                TextInput {
                    oninput: move |e: FormEvent| registration.edit(FieldUpdate::NationalId(e.value())),
                    value: attendee.national_id.clone(),
                    disabled: submitting,
                }
            }
            div {
                class: "field is-grouped is-grouped-right",
                div {
                    class: "control",
                    Button {
                        flavor: ButtonFlavor::Success,
                        disabled: submitting,
                        is_loading: submitting,
                        onclick: move |_| registration.submit(),
                        if submitting { "Submitting..." } else { "Register" }
                    }
                }
            }
        }
    }
}
