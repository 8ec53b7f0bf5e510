use tracing::{info, warn};

use crate::{
    api::{self, Api},
    model::EventSummary,
};

/// Every failure to resolve an event is shown to the attendee with the same message.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum Error {
    #[error("Event not found or no longer available")]
    FetchFailed(api::Error),

    #[error("Event not found or no longer available")]
    NotFound,
}

/// The event a registration will be written against.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedEvent {
    /// The id exactly as the API spells it.
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub disabled: bool,
    pub company_disabled: bool,
}

impl From<&EventSummary> for ResolvedEvent {
    fn from(event: &EventSummary) -> Self {
        ResolvedEvent {
            id: event.id.clone(),
            name: event
                .name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| event.id.clone()),
            image: event.image.clone().filter(|image| !image.is_empty()),
            disabled: event.is_disabled(),
            company_disabled: event.is_company_disabled(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Found(ResolvedEvent),
    /// The events endpoint refused the company outright.
    CompanyDisabled,
}

/// Returns the first event whose id equals `event_id` once both are trimmed and lowercased.
pub fn find_event<'a>(events: &'a [EventSummary], event_id: &str) -> Option<&'a EventSummary> {
    let wanted = normalize(event_id);
    events.iter().find(|event| normalize(&event.id) == wanted)
}

fn normalize(id: &str) -> String {
    id.trim().to_lowercase()
}

pub async fn resolve_event<A: Api>(
    api: &A,
    company_name: &str,
    event_id: &str,
) -> Result<Resolution, Error> {
    let events = match api.list_events(company_name.to_owned()).await {
        Ok(events) => events,
        Err(e) if e.status() == Some(api::FORBIDDEN) => {
            info!("company {} is disabled", company_name);
            return Ok(Resolution::CompanyDisabled);
        }
        Err(e) => {
            warn!("failed to list events for {}: {}", company_name, e);
            return Err(Error::FetchFailed(e));
        }
    };

    let event = find_event(&events, event_id).ok_or_else(|| {
        warn!(
            "event {} not among {} events of {}",
            event_id,
            events.len(),
            company_name
        );
        Error::NotFound
    })?;

    info!("resolved event {} for {}", event.id, company_name);
    Ok(Resolution::Found(ResolvedEvent::from(event)))
}
