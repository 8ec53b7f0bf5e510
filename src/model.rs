use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Sentinel used by the API in `status` and `companyStatus` to mark an entity closed for
/// registration.
pub const DISABLED: &str = "disabled";

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    Student,
    Graduate,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Student => "Student",
            Status::Graduate => "Graduate",
        }
    }
}

/// The attendee details as typed into the page. Enum fields stay `None` until the user picks a
/// value, which is what the required-field check treats as empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub gender: Option<Gender>,
    pub college: String,
    pub status: Option<Status>,
    pub national_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Not used by the page; kept as any JSON number so an odd count never fails the listing.
    #[serde(default)]
    pub registrations: Option<serde_json::Number>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub company_status: Option<String>,
}

impl EventSummary {
    pub fn is_disabled(&self) -> bool {
        self.status.as_deref() == Some(DISABLED)
    }

    pub fn is_company_disabled(&self) -> bool {
        self.company_status.as_deref() == Some(DISABLED)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub events: Vec<EventSummary>,
}

/// Body of `POST /events/register`. `event_name` carries the canonical event id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub company_name: String,
    pub event_name: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub gender: Gender,
    pub college: String,
    pub status: Status,
    pub national_id: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}
