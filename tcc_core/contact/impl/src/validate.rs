use std::sync::LazyLock;

use regex::Regex;
use tcc_core_contact_contracts::validate::ContactFormValidateService;
use tcc_models::contact::{FieldError, FieldErrors, FormFields};
use tcc_utils::trace_instrument;

/// Minimum length of a message in UTF-16 code units, not counting surrounding
/// whitespace.
pub const MESSAGE_MIN_LEN: usize = 10;

/// Only checks the rough shape `local@domain.tld`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFormValidateServiceImpl;

impl ContactFormValidateService for ContactFormValidateServiceImpl {
    #[trace_instrument(skip(self, fields))]
    fn validate(&self, fields: &FormFields) -> FieldErrors {
        [
            validate_name(&fields.name),
            validate_email(&fields.email),
            validate_subject(&fields.subject),
            validate_message(&fields.message),
            validate_consent(fields.consent),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Strips the same characters as `String.prototype.trim` in browsers: Unicode
/// white space except U+0085, plus the byte order mark.
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

fn validate_name(name: &str) -> Option<FieldError> {
    trim(name).is_empty().then_some(FieldError::NameRequired)
}

fn validate_email(email: &str) -> Option<FieldError> {
    if trim(email).is_empty() {
        Some(FieldError::EmailRequired)
    } else if !EMAIL_REGEX.is_match(email) {
        Some(FieldError::EmailInvalid)
    } else {
        None
    }
}

fn validate_subject(subject: &str) -> Option<FieldError> {
    trim(subject).is_empty().then_some(FieldError::SubjectRequired)
}

fn validate_message(message: &str) -> Option<FieldError> {
    let message = trim(message);
    if message.is_empty() {
        Some(FieldError::MessageRequired)
    } else if message.encode_utf16().count() < MESSAGE_MIN_LEN {
        Some(FieldError::MessageTooShort)
    } else {
        None
    }
}

fn validate_consent(consent: bool) -> Option<FieldError> {
    (!consent).then_some(FieldError::ConsentRequired)
}
