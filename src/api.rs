pub mod http;

use crate::model::{EventSummary, RegisterRequest};
use mockall::automock;
use std::future::Future;

pub use http::HttpClient;

pub const FORBIDDEN: u16 = 403;

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum Error {
    #[error("request failed: {0}")]
    Network(String),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("server responded with status {status}")]
    Status {
        status: u16,
        /// The `error` field of a JSON error body, when the server sent one.
        message: Option<String>,
    },
}

impl Error {
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The two calls the registration page makes against the events API.
#[automock]
pub trait Api {
    fn list_events(
        &self,
        company_name: String,
    ) -> impl Future<Output = Result<Vec<EventSummary>, Error>>;

    fn register(&self, request: RegisterRequest) -> impl Future<Output = Result<(), Error>>;
}
