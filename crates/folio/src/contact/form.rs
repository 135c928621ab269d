//! Contact form state and its pure transitions.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, trace};

use super::email::{is_blank, is_valid_email};
use crate::error::Error;

/// Message for a blank name.
pub const NAME_REQUIRED: &str = "Name is required";
/// Message for a blank email.
pub const EMAIL_REQUIRED: &str = "Email is required";
/// Message for an email that fails the shape check.
pub const EMAIL_INVALID: &str = "Invalid email address";
/// Message for a blank message.
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// An editable field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sender's name.
    Name,
    /// Sender's email address.
    Email,
    /// Message body.
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The field's name as used in form markup.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(Error::UnknownField {
                name: other.to_string(),
            }),
        }
    }
}

/// Key of an entry in [`ContactFormErrors`].
///
/// `Form` holds errors about the submission as a whole rather than one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKey {
    /// Error on the name field.
    Name,
    /// Error on the email field.
    Email,
    /// Error on the message field.
    Message,
    /// Form-level error.
    Form,
}

impl ErrorKey {
    /// The key's name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
            Self::Form => "form",
        }
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Field> for ErrorKey {
    fn from(field: Field) -> Self {
        match field {
            Field::Name => Self::Name,
            Field::Email => Self::Email,
            Field::Message => Self::Message,
        }
    }
}

/// Current values of the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormState {
    /// Sender's name.
    pub name: String,
    /// Sender's email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactFormState {
    /// Value of one field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Check if every field is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Error messages keyed by the invalid field; only invalid keys are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactFormErrors(BTreeMap<ErrorKey, String>);

impl ContactFormErrors {
    /// Message for a key, if that key is invalid.
    #[must_use]
    pub fn get(&self, key: impl Into<ErrorKey>) -> Option<&str> {
        self.0.get(&key.into()).map(String::as_str)
    }

    /// Check if a key has an error.
    #[must_use]
    pub fn contains(&self, key: impl Into<ErrorKey>) -> bool {
        self.0.contains_key(&key.into())
    }

    /// Check if there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(key, message)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (ErrorKey, &str)> {
        self.0.iter().map(|(key, message)| (*key, message.as_str()))
    }

    fn insert(&mut self, key: ErrorKey, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    fn remove(&mut self, key: ErrorKey) {
        self.0.remove(&key);
    }
}

/// Check the form values.
///
/// A field that is empty or all whitespace is missing. The email shape check
/// runs on the stored value only when it is not blank.
#[must_use]
pub fn validate(state: &ContactFormState) -> ContactFormErrors {
    let mut errors = ContactFormErrors::default();

    if is_blank(&state.name) {
        errors.insert(ErrorKey::Name, NAME_REQUIRED);
    }

    if is_blank(&state.email) {
        errors.insert(ErrorKey::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&state.email) {
        errors.insert(ErrorKey::Email, EMAIL_INVALID);
    }

    if is_blank(&state.message) {
        errors.insert(ErrorKey::Message, MESSAGE_REQUIRED);
    }

    errors
}

/// An accepted submission, ready to hand to a delivery collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Sender's name.
    pub name: String,
    /// Sender's email address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// When the submission passed validation.
    pub received_at: DateTime<Utc>,
}

impl Submission {
    fn from_state(state: ContactFormState) -> Self {
        Self {
            name: state.name,
            email: state.email,
            message: state.message,
            received_at: Utc::now(),
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the errors now shown on the form.
    Rejected(ContactFormErrors),

    /// Validation passed and the submission was handed off.
    Accepted(Submission),

    /// Validation passed but delivery failed. Only produced by
    /// [`super::ContactFormController`] when its sink fails.
    DeliveryFailed {
        /// Why delivery failed.
        reason: String,
    },
}

impl SubmitOutcome {
    /// Check if the attempt succeeded.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Complete contact form state: field values, errors and submission flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    /// Field values.
    pub state: ContactFormState,
    /// Current errors.
    pub errors: ContactFormErrors,
    /// Set once a submission has been accepted. Never reset.
    pub submitted: bool,
}

impl ContactForm {
    /// A blank form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new field value and clear that field's error.
    #[must_use]
    pub fn apply_field_change(mut self, field: Field, value: impl Into<String>) -> Self {
        *self.state.slot(field) = value.into();
        self.errors.remove(field.into());
        trace!(%field, "Contact form field changed");
        self
    }

    /// Validate and, when valid, accept the submission.
    ///
    /// The validation result replaces the current errors in either case. On
    /// success the fields are reset and `submitted` is set; on failure the
    /// fields and `submitted` are left untouched.
    #[must_use]
    pub fn apply_submit(mut self) -> (Self, SubmitOutcome) {
        let errors = validate(&self.state);

        if errors.is_empty() {
            let submission = Submission::from_state(std::mem::take(&mut self.state));
            self.errors = errors;
            self.submitted = true;
            debug!("Contact form submission accepted");
            (self, SubmitOutcome::Accepted(submission))
        } else {
            debug!(errors = errors.len(), "Contact form submission rejected");
            self.errors = errors.clone();
            (self, SubmitOutcome::Rejected(errors))
        }
    }

    /// Record a failed delivery: the form-level error replaces all errors.
    /// Field values and `submitted` are left untouched.
    #[must_use]
    pub fn apply_delivery_failure(mut self, message: impl Into<String>) -> Self {
        self.errors = ContactFormErrors::default();
        self.errors.insert(ErrorKey::Form, message);
        self
    }
}
