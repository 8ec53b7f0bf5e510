use dioxus::prelude::*;
use tracing::debug;

use crate::{
    api::HttpClient,
    hooks::use_api,
    resolve::resolve_event,
    state::{Action, FieldUpdate, PageState},
    submit,
};

/// State and actions behind the registration page.
///
/// Both network calls run as tasks owned by the calling component, so leaving the page cancels
/// them before they can touch the signals again.
#[derive(Clone, Copy, PartialEq)]
pub struct Registration {
    pub state: Signal<PageState>,
    company_name: ReadOnlySignal<String>,
    api: Signal<HttpClient>,
}

pub fn use_registration(
    company_name: ReadOnlySignal<String>,
    event_id: ReadOnlySignal<String>,
) -> Registration {
    let client = use_api();
    let api = use_signal(move || client);
    let mut state = use_signal(PageState::default);

    // Reruns whenever the route params change.
    let _ = use_resource(move || {
        let api = api.peek().clone();
        async move {
            let company_name = company_name();
            let event_id = event_id();
            debug!("resolving {} for {}", event_id, company_name);

            state.write().apply(Action::ResolveStart);
            let action = match resolve_event(&api, &company_name, &event_id).await {
                Ok(resolution) => Action::ResolveSuccess(resolution),
                Err(e) => Action::ResolveError(e.to_string()),
            };
            state.write().apply(action);
        }
    });

    Registration {
        state,
        company_name,
        api,
    }
}

impl Registration {
    pub fn submit(mut self) {
        if self.state.peek().submitting {
            return;
        }

        let prepared = submit::prepare(&self.state.peek(), &self.company_name.peek());

        let request = match prepared {
            Ok(request) => request,
            Err(e) => {
                self.state.write().apply(Action::SubmitError(e.to_string()));
                return;
            }
        };

        self.state.write().apply(Action::SubmitStart);

        let api = self.api.peek().clone();
        spawn(async move {
            match submit::submit(&api, request).await {
                Ok(()) => self.state.write().apply(Action::SubmitSuccess),
                Err(e) => self.state.write().apply(Action::SubmitError(e.to_string())),
            }
        });
    }

    pub fn edit(mut self, update: FieldUpdate) {
        self.state.write().apply(Action::Edit(update));
    }

    pub fn dismiss_error(mut self) {
        self.state.write().apply(Action::DismissError);
    }

    pub fn register_another(mut self) {
        self.state.write().apply(Action::Reset);
    }
}
