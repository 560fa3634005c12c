use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub const ERROR_CLASS: &str = "error";
pub const ERROR_TEXT_CLASS: &str = "field-error";

// no whitespace anywhere, exactly one @, and at least one dot somewhere after it
pub const EMAIL_REGEX: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("email regex is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

impl From<&str> for FieldKind {
    fn from(input_type: &str) -> FieldKind {
        if input_type.eq_ignore_ascii_case("email") {
            FieldKind::Email
        } else {
            FieldKind::Text
        }
    }
}

// the two ways a field can fail
//
// the display strings are exactly what the user sees under the field
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

// the value check, without any of the error display bookkeeping
//
// required is checked first and wins; an empty optional email field is fine
pub fn validate_value(value: &str, required: bool, kind: FieldKind) -> Result<(), FieldError> {
    let value = value.trim();

    if required && value.is_empty() {
        return Err(FieldError::Required);
    }

    if kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }

    Ok(())
}

// a form field as far as validation is concerned
//
// the webapp implements this for live input/textarea elements, the tests implement it
// over plain structs.  the error text element is the one placed right after the field
pub trait FieldView {
    fn value(&self) -> String;

    fn is_required(&self) -> bool;

    fn kind(&self) -> FieldKind;

    fn set_error_marker(&self, on: bool);

    fn has_error_marker(&self) -> bool;

    // the text of the currently attached error element, if there is one
    fn error_text(&self) -> Option<String>;

    fn insert_error_text(&self, message: &str);

    fn remove_error_text(&self);
}

pub fn clear_field_error<F: FieldView + ?Sized>(field: &F) {
    field.set_error_marker(false);

    if field.error_text().is_some() {
        field.remove_error_text();
    }
}

// showing an error always replaces whatever was there before, so there is never more than
// one error element per field
pub fn show_field_error<F: FieldView + ?Sized>(field: &F, error: FieldError) {
    clear_field_error(field);

    field.set_error_marker(true);
    field.insert_error_text(&error.to_string());
}

pub fn validate_field<F: FieldView + ?Sized>(field: &F) -> Result<(), FieldError> {
    clear_field_error(field);

    let result = validate_value(&field.value(), field.is_required(), field.kind());

    if let Err(error) = result {
        show_field_error(field, error);
    }

    result
}

// every field is checked so every error shows up at once
pub fn validate_form<'a, F, I>(fields: I) -> bool
where
    F: FieldView + ?Sized + 'a,
    I: IntoIterator<Item = &'a F>,
{
    fields
        .into_iter()
        .fold(true, |valid, field| validate_field(field).is_ok() && valid)
}
