use std::sync::LazyLock;

use regex::Regex;

use crate::model::RegistrationForm;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,15}$").expect("phone pattern is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("All fields are required")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number (10-15 digits)")]
    InvalidPhone,
}

/// Checks the form in a fixed order: required fields, then email, then phone. The first
/// failing rule is reported.
pub fn validate(form: &RegistrationForm) -> Result<(), Error> {
    let text_fields = [
        &form.name,
        &form.phone,
        &form.email,
        &form.college,
        &form.national_id,
    ];

    if text_fields.iter().any(|field| field.is_empty())
        || form.gender.is_none()
        || form.status.is_none()
    {
        return Err(Error::MissingFields);
    }

    if !EMAIL.is_match(&form.email) {
        return Err(Error::InvalidEmail);
    }

    if !PHONE.is_match(&form.phone) {
        return Err(Error::InvalidPhone);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate, Error};
    use crate::model::{Gender, RegistrationForm, Status};
    use test_case::test_case;

    fn filled() -> RegistrationForm {
        RegistrationForm {
            name: "Jane Doe".to_owned(),
            phone: "1234567890".to_owned(),
            email: "jane@example.com".to_owned(),
            gender: Some(Gender::Female),
            college: "Engineering".to_owned(),
            status: Some(Status::Student),
            national_id: "29801011234567".to_owned(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(validate(&filled()), Ok(()));
    }

    #[test]
    fn default_form_is_missing_fields() {
        assert_eq!(
            validate(&RegistrationForm::default()),
            Err(Error::MissingFields)
        );
    }

    #[test_case(|f: &mut RegistrationForm| f.name.clear(); "name")]
    #[test_case(|f: &mut RegistrationForm| f.phone.clear(); "phone")]
    #[test_case(|f: &mut RegistrationForm| f.email.clear(); "email")]
    #[test_case(|f: &mut RegistrationForm| f.gender = None; "gender")]
    #[test_case(|f: &mut RegistrationForm| f.college.clear(); "college")]
    #[test_case(|f: &mut RegistrationForm| f.status = None; "status")]
    #[test_case(|f: &mut RegistrationForm| f.national_id.clear(); "national id")]
    fn empty_field(clear: fn(&mut RegistrationForm)) {
        let mut form = filled();
        clear(&mut form);
        assert_eq!(validate(&form), Err(Error::MissingFields));
    }

    #[test_case("a@b", false; "no tld")]
    #[test_case("a@b.com", true; "simple")]
    #[test_case("first.last@sub.example.org", true; "dotted")]
    #[test_case("a b@c.com", false; "whitespace")]
    #[test_case("a@@b.com", false; "double at")]
    #[test_case("@b.com", false; "no local part")]
    #[test_case("   ", false; "whitespace only")]
    fn email(email: &str, valid: bool) {
        let mut form = filled();
        form.email = email.to_owned();
        let expected = if valid { Ok(()) } else { Err(Error::InvalidEmail) };
        assert_eq!(validate(&form), expected);
    }

    #[test_case("12345", false; "five digits")]
    #[test_case("1234567890", true; "ten digits")]
    #[test_case("123456789012345", true; "fifteen digits")]
    #[test_case("1234567890123456", false; "sixteen digits")]
    #[test_case("+201234567890", false; "plus sign")]
    #[test_case("123-456-7890", false; "dashes")]
    fn phone(phone: &str, valid: bool) {
        let mut form = filled();
        form.phone = phone.to_owned();
        let expected = if valid { Ok(()) } else { Err(Error::InvalidPhone) };
        assert_eq!(validate(&form), expected);
    }

    #[test]
    fn whitespace_only_text_is_present() {
        let mut form = filled();
        form.name = "   ".to_owned();
        form.college = " ".to_owned();
        form.national_id = "\t".to_owned();
        assert_eq!(validate(&form), Ok(()));
    }

    #[test]
    fn email_checked_before_phone() {
        let mut form = filled();
        form.email = "a@b".to_owned();
        form.phone = "12345".to_owned();
        assert_eq!(validate(&form), Err(Error::InvalidEmail));
    }

    #[test]
    fn required_checked_before_format() {
        let mut form = filled();
        form.email = "a@b".to_owned();
        form.college.clear();
        assert_eq!(validate(&form), Err(Error::MissingFields));
    }
}
