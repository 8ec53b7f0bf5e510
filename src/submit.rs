use tracing::{info, warn};

use crate::{
    api::{self, Api},
    model::RegisterRequest,
    state::PageState,
    validation,
};

pub const GENERIC_FAILURE: &str = "Registration failed. Please try again.";

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum Error {
    #[error("Registration is not available for this event")]
    NotReady,

    #[error(transparent)]
    Invalid(#[from] validation::Error),

    #[error("{}", .message.as_deref().unwrap_or(GENERIC_FAILURE))]
    Rejected {
        message: Option<String>,
        source: api::Error,
    },
}

impl From<api::Error> for Error {
    fn from(e: api::Error) -> Self {
        let message = match &e {
            api::Error::Status { message, .. } => message.clone(),
            _ => None,
        };
        Error::Rejected { message, source: e }
    }
}

/// Checks everything that has to hold before a request is sent and builds its body from the
/// form held in `state`. Nothing here touches the network.
pub fn prepare(state: &PageState, company_name: &str) -> Result<RegisterRequest, Error> {
    let form = &state.form;
    let event_id = state.submittable_event().ok_or(Error::NotReady)?;

    validation::validate(form)?;

    let (Some(gender), Some(status)) = (form.gender, form.status) else {
        return Err(validation::Error::MissingFields.into());
    };

    Ok(RegisterRequest {
        company_name: company_name.to_owned(),
        event_name: event_id.to_owned(),
        name: form.name.clone(),
        phone: form.phone.clone(),
        email: form.email.clone(),
        gender,
        college: form.college.clone(),
        status,
        national_id: form.national_id.clone(),
    })
}

pub async fn submit<A: Api>(api: &A, request: RegisterRequest) -> Result<(), Error> {
    let event_name = request.event_name.clone();

    match api.register(request).await {
        Ok(()) => {
            info!("registered attendee for {}", event_name);
            Ok(())
        }
        Err(e) => {
            warn!("registration for {} failed: {}", event_name, e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{prepare, submit, Error, GENERIC_FAILURE};
    use crate::{
        api::{self, MockApi},
        model::{Gender, RegisterRequest, RegistrationForm, Status},
        resolve::{Resolution, ResolvedEvent},
        state::{Action, PageState},
        validation,
    };
    use mockall::predicate::eq;
    use test_case::test_case;

    fn form() -> RegistrationForm {
        RegistrationForm {
            name: "Jane Doe".to_owned(),
            phone: "1234567890".to_owned(),
            email: "jane@example.com".to_owned(),
            gender: Some(Gender::Female),
            college: "Engineering".to_owned(),
            status: Some(Status::Graduate),
            national_id: "A123".to_owned(),
        }
    }

    fn request() -> RegisterRequest {
        RegisterRequest {
            company_name: "Acme".to_owned(),
            event_name: "Gala Night".to_owned(),
            name: "Jane Doe".to_owned(),
            phone: "1234567890".to_owned(),
            email: "jane@example.com".to_owned(),
            gender: Gender::Female,
            college: "Engineering".to_owned(),
            status: Status::Graduate,
            national_id: "A123".to_owned(),
        }
    }

    fn ready() -> PageState {
        ready_with(form())
    }

    fn ready_with(form: RegistrationForm) -> PageState {
        let mut state = PageState {
            form,
            ..PageState::default()
        };
        state.apply(Action::ResolveSuccess(Resolution::Found(ResolvedEvent {
            id: "Gala Night".to_owned(),
            name: "Gala Night".to_owned(),
            image: None,
            disabled: false,
            company_disabled: false,
        })));
        state
    }

    #[test]
    fn prepare_uses_canonical_id() {
        assert_eq!(prepare(&ready(), "Acme"), Ok(request()));
    }

    enum NotReadyTest {
        Loading,
        Unresolved,
        EventDisabled,
        CompanyDisabled,
        Submitting,
    }

    #[test_case(NotReadyTest::Loading; "loading")]
    #[test_case(NotReadyTest::Unresolved; "unresolved")]
    #[test_case(NotReadyTest::EventDisabled; "event_disabled")]
    #[test_case(NotReadyTest::CompanyDisabled; "company_disabled")]
    #[test_case(NotReadyTest::Submitting; "submitting")]
    fn prepare_not_ready(test_name: NotReadyTest) {
        let state = match test_name {
            NotReadyTest::Loading => PageState::default(),
            NotReadyTest::Unresolved => {
                let mut state = PageState::default();
                state.apply(Action::ResolveError("gone".to_owned()));
                state
            }
            NotReadyTest::EventDisabled => PageState {
                event_disabled: true,
                ..ready()
            },
            NotReadyTest::CompanyDisabled => PageState {
                company_disabled: true,
                ..ready()
            },
            NotReadyTest::Submitting => {
                let mut state = ready();
                state.apply(Action::SubmitStart);
                state
            }
        };

        assert_eq!(prepare(&state, "Acme"), Err(Error::NotReady));
    }

    #[test]
    fn prepare_reports_validation() {
        let mut invalid = form();
        invalid.college.clear();

        let err = prepare(&ready_with(invalid), "Acme").unwrap_err();
        assert_eq!(err, Error::Invalid(validation::Error::MissingFields));
        assert_eq!(err.to_string(), "All fields are required");
    }

    #[tokio::test]
    async fn submit_success() {
        let mut api = MockApi::new();
        api.expect_register()
            .with(eq(request()))
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        assert_eq!(submit(&api, request()).await, Ok(()));
    }

    #[test_case(Some("Already registered"), "Already registered"; "server message")]
    #[test_case(None, GENERIC_FAILURE; "fallback")]
    #[tokio::test]
    async fn submit_rejected(message: Option<&'static str>, shown: &str) {
        let mut api = MockApi::new();
        api.expect_register().times(1).returning(move |_| {
            Box::pin(async move {
                Err(api::Error::Status {
                    status: 409,
                    message: message.map(str::to_owned),
                })
            })
        });

        let err = submit(&api, request()).await.unwrap_err();
        assert_eq!(err.to_string(), shown);
    }

    #[tokio::test]
    async fn submit_network_failure_is_generic() {
        let mut api = MockApi::new();
        api.expect_register().times(1).returning(|_| {
            Box::pin(futures::future::ready(Err(api::Error::Network(
                "offline".to_owned(),
            ))))
        });

        let err = submit(&api, request()).await.unwrap_err();
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn empty_field_sends_nothing() {
        let mut api = MockApi::new();
        api.expect_register().never();

        let mut incomplete = form();
        incomplete.name.clear();

        let result = match prepare(&ready_with(incomplete), "Acme") {
            Ok(request) => submit(&api, request).await,
            Err(e) => Err(e),
        };

        assert_eq!(
            result.map_err(|e| e.to_string()),
            Err("All fields are required".to_owned())
        );
    }
}
