use gloo_net::http::{Request, Response};
use tracing::warn;

use super::{Api, Error};
use crate::{
    config::Config,
    model::{ErrorResponse, EventSummary, EventsResponse, RegisterRequest},
};

/// Browser `fetch` client for the events API.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpClient {
    config: Config,
}

impl HttpClient {
    pub fn new(config: Config) -> Self {
        HttpClient { config }
    }
}

impl Api for HttpClient {
    async fn list_events(&self, company_name: String) -> Result<Vec<EventSummary>, Error> {
        let response = Request::get(&self.config.events_url())
            .query([("company", company_name.as_str())])
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.ok() {
            return Err(status_error(response).await);
        }

        let body: EventsResponse = response
            .json()
            .await
            .map_err(|e| Error::Decode(e.to_string()))?;

        Ok(body.events)
    }

    async fn register(&self, request: RegisterRequest) -> Result<(), Error> {
        let response = Request::post(&self.config.register_url())
            .json(&request)
            .map_err(|e| Error::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.ok() {
            return Err(status_error(response).await);
        }

        Ok(())
    }
}

async fn status_error(response: Response) -> Error {
    let status = response.status();
    let message = match response.text().await {
        Ok(body) => error_message(&body),
        Err(e) => {
            warn!("could not read error body for status {}: {}", status, e);
            None
        }
    };

    Error::Status { status, message }
}

/// Pulls `error` out of a JSON error body. Bodies that are not JSON yield nothing.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|body| body.error)
        .filter(|error| !error.trim().is_empty())
}
