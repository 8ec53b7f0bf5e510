use crate::{
    model::{Gender, RegistrationForm, Status},
    resolve::{Resolution, ResolvedEvent},
};

/// Everything the registration page renders from. Only changed through [`PageState::apply`].
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub loading: bool,
    pub submitting: bool,
    /// Resolution failure, shown as a full page.
    pub fatal_error: Option<String>,
    /// Validation or submission failure, shown inline above the form.
    pub form_error: Option<String>,
    pub success: bool,
    pub event_id: Option<String>,
    pub event_name: Option<String>,
    pub event_image: Option<String>,
    pub event_disabled: bool,
    pub company_disabled: bool,
    pub form: RegistrationForm,
}

impl Default for PageState {
    fn default() -> Self {
        PageState {
            loading: true,
            submitting: false,
            fatal_error: None,
            form_error: None,
            success: false,
            event_id: None,
            event_name: None,
            event_image: None,
            event_disabled: false,
            company_disabled: false,
            form: RegistrationForm::default(),
        }
    }
}

/// A single edited form field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Phone(String),
    Email(String),
    Gender(Option<Gender>),
    College(String),
    Status(Option<Status>),
    NationalId(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    ResolveStart,
    ResolveSuccess(Resolution),
    ResolveError(String),
    Edit(FieldUpdate),
    SubmitStart,
    SubmitSuccess,
    SubmitError(String),
    DismissError,
    /// "Register Another Person".
    Reset,
}

/// What the page shows, in priority order.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Loading,
    Error(String),
    EventDisabled,
    CompanyDisabled,
    Form { success: bool },
}

impl PageState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ResolveStart => *self = PageState::default(),
            Action::ResolveSuccess(Resolution::Found(event)) => {
                let ResolvedEvent {
                    id,
                    name,
                    image,
                    disabled,
                    company_disabled,
                } = event;
                self.loading = false;
                self.fatal_error = None;
                self.event_id = Some(id);
                self.event_name = Some(name);
                self.event_image = image;
                self.event_disabled = disabled;
                self.company_disabled = company_disabled;
            }
            Action::ResolveSuccess(Resolution::CompanyDisabled) => {
                self.loading = false;
                self.fatal_error = None;
                self.company_disabled = true;
            }
            Action::ResolveError(message) => {
                self.loading = false;
                self.event_id = None;
                self.fatal_error = Some(message);
            }
            Action::Edit(update) => {
                let form = &mut self.form;
                match update {
                    FieldUpdate::Name(name) => form.name = name,
                    FieldUpdate::Phone(phone) => form.phone = phone,
                    FieldUpdate::Email(email) => form.email = email,
                    FieldUpdate::Gender(gender) => form.gender = gender,
                    FieldUpdate::College(college) => form.college = college,
                    FieldUpdate::Status(status) => form.status = status,
                    FieldUpdate::NationalId(national_id) => form.national_id = national_id,
                }
            }
            Action::SubmitStart => {
                self.submitting = true;
                self.form_error = None;
                self.success = false;
            }
            Action::SubmitSuccess => {
                self.submitting = false;
                self.form_error = None;
                self.success = true;
                self.form = RegistrationForm::default();
            }
            Action::SubmitError(message) => {
                self.submitting = false;
                self.form_error = Some(message);
            }
            Action::DismissError => self.form_error = None,
            Action::Reset => {
                self.success = false;
                self.form_error = None;
                self.form = RegistrationForm::default();
            }
        }
    }

    pub fn view(&self) -> View {
        if self.loading {
            return View::Loading;
        }
        if let Some(error) = self.fatal_error.as_ref().filter(|_| !self.submitting) {
            return View::Error(error.clone());
        }
        if self.event_disabled {
            return View::EventDisabled;
        }
        if self.company_disabled {
            return View::CompanyDisabled;
        }
        View::Form {
            success: self.success,
        }
    }

    /// The canonical event id, when a registration may be sent right now.
    pub fn submittable_event(&self) -> Option<&str> {
        if self.loading
            || self.submitting
            || self.fatal_error.is_some()
            || self.event_disabled
            || self.company_disabled
        {
            return None;
        }
        self.event_id.as_deref()
    }
}
