use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::submission::SubmissionStatus;

/// The values currently entered into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Whether the user agreed to the processing of their personal data.
    pub consent: bool,
}

impl FormFields {
    /// Writes the value carried by `update` into the corresponding field.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(name) => self.name = name,
            FieldUpdate::Email(email) => self.email = email,
            FieldUpdate::Subject(subject) => self.subject = subject,
            FieldUpdate::Message(message) => self.message = message,
            FieldUpdate::Consent(consent) => self.consent = consent,
        }
    }

    /// Returns `true` if every field still holds its default value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    Consent,
}

impl Field {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Subject,
        Self::Message,
        Self::Consent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
            Self::Consent => "consent",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown form field {0:?}")]
pub struct UnknownFieldError(pub String);

/// An untyped field value as produced by a generic input handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

/// A single edit of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Email(String),
    Subject(String),
    Message(String),
    Consent(bool),
}

impl FieldUpdate {
    /// Pairs a field identifier with an untyped value.
    ///
    /// Text fields only accept [`FieldValue::Text`] and the consent checkbox
    /// only accepts [`FieldValue::Flag`].
    pub fn new(field: Field, value: FieldValue) -> Result<Self, FieldValueMismatchError> {
        match (field, value) {
            (Field::Name, FieldValue::Text(name)) => Ok(Self::Name(name)),
            (Field::Email, FieldValue::Text(email)) => Ok(Self::Email(email)),
            (Field::Subject, FieldValue::Text(subject)) => Ok(Self::Subject(subject)),
            (Field::Message, FieldValue::Text(message)) => Ok(Self::Message(message)),
            (Field::Consent, FieldValue::Flag(consent)) => Ok(Self::Consent(consent)),
            (field, _) => Err(FieldValueMismatchError(field)),
        }
    }

    pub fn field(&self) -> Field {
        match self {
            Self::Name(_) => Field::Name,
            Self::Email(_) => Field::Email,
            Self::Subject(_) => Field::Subject,
            Self::Message(_) => Field::Message,
            Self::Consent(_) => Field::Consent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Value has the wrong type for form field {0}")]
pub struct FieldValueMismatchError(pub Field);

/// A validation failure of a single field. The display representation is the
/// message shown next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    #[error("Nome é obrigatório")]
    NameRequired,
    #[error("E-mail é obrigatório")]
    EmailRequired,
    #[error("E-mail inválido")]
    EmailInvalid,
    #[error("Assunto é obrigatório")]
    SubjectRequired,
    #[error("Mensagem é obrigatória")]
    MessageRequired,
    #[error("Mensagem deve ter pelo menos 10 caracteres")]
    MessageTooShort,
    #[error("É necessário concordar com o tratamento dos dados")]
    ConsentRequired,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            Self::NameRequired => Field::Name,
            Self::EmailRequired | Self::EmailInvalid => Field::Email,
            Self::SubjectRequired => Field::Subject,
            Self::MessageRequired | Self::MessageTooShort => Field::Message,
            Self::ConsentRequired => Field::Consent,
        }
    }
}

impl Serialize for FieldError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// At most one error per field. A field without an entry has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` for the field it belongs to, replacing any previous
    /// entry of that field.
    pub fn insert(&mut self, error: FieldError) {
        self.0.insert(error.field(), error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(&field, &error)| (field, error))
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        let mut out = Self::new();
        iter.into_iter().for_each(|error| out.insert(error));
        out
    }
}

/// Everything a presentation layer needs to render the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
}
