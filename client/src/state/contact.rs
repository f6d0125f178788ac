//! Contact form fields, validation and simulated submission.
//!
//! DESIGN
//! ======
//! Validation runs only on submit. A failed submit stores one message per
//! invalid field; editing a field clears just that field's message. A
//! successful submit flips `submitting` and the component finishes it after
//! `SUBMIT_DELAY_MS` with `finish_submit`, which empties every field. No
//! request ever leaves the browser.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Simulated network latency before the success toast.
pub const SUBMIT_DELAY_MS: u64 = 2_000;
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    FullName,
    Email,
    Company,
    Message,
}

/// How a field is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    TextArea,
}

impl ContactField {
    /// Render order.
    pub const ALL: [ContactField; 4] = [Self::FullName, Self::Email, Self::Company, Self::Message];

    /// Form control `name` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Company => "company",
            Self::Message => "message",
        }
    }

    /// Placeholder text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::Email => "Email",
            Self::Company => "Company",
            Self::Message => "Message",
        }
    }

    #[must_use]
    pub fn input_kind(self) -> InputKind {
        match self {
            Self::Email => InputKind::Email,
            Self::Message => InputKind::TextArea,
            Self::FullName | Self::Company => InputKind::Text,
        }
    }

    #[must_use]
    pub fn error_message(self) -> &'static str {
        match self {
            Self::FullName => "Full name is required",
            Self::Email => "Valid email is required",
            Self::Company => "Company name is required",
            Self::Message => "Message is required",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FullName => &mut self.full_name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Message => &mut self.message,
        }
    }

    /// Check every field, collecting one message per invalid field.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any field is invalid.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors: FieldErrors = ContactField::ALL
            .into_iter()
            .filter(|field| !field_is_valid(*field, self.get(*field)))
            .map(|field| (field, field.error_message()))
            .collect();
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

pub type FieldErrors = BTreeMap<ContactField, &'static str>;

fn field_is_valid(field: ContactField, value: &str) -> bool {
    let trimmed = value.trim();
    match field {
        ContactField::Email => !trimmed.is_empty() && looks_like_email(value),
        ContactField::FullName | ContactField::Company | ContactField::Message => !trimmed.is_empty(),
    }
}

/// Minimal email shape: somewhere in the input a whitespace-free run of the
/// form `x@y.z`, each part at least one character.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex should compile"));

#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Result of pressing "Send".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are now on the state.
    Rejected,
    /// Validation passed; caller must schedule `finish_submit`.
    Started,
    /// A submission is already in flight.
    Busy,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl ContactState {
    /// Field edit: store the raw value and clear that field's error.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        *self.form.slot_mut(field) = value;
        self.errors.remove(&field);
    }

    #[must_use]
    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::Busy;
        }
        match self.form.validate() {
            Ok(()) => {
                self.errors.clear();
                self.submitting = true;
                SubmitOutcome::Started
            }
            Err(errors) => {
                self.errors = errors;
                SubmitOutcome::Rejected
            }
        }
    }

    /// Simulated round trip finished: clear the flag and every field.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
        self.form = ContactForm::default();
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.submitting { "Loading..." } else { "Send" }
    }
}
