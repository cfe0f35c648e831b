//! Visitor form submissions.
//!
//! Forms are validated, never persisted. A failed check produces a
//! [`FormError`] that the page shows as a blocking alert.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gate::Renderable;
use crate::i18n::{Bundle, TextKey};

key_enum! {
    /// A required form field.
    pub enum FormField {
        Name => "name",
        Company => "company",
        Email => "email",
    }
}

impl FormField {
    /// Localized field label.
    pub fn label(self, bundle: &Bundle) -> &'static str {
        bundle.text(match self {
            FormField::Name => TextKey::YourName,
            FormField::Company => TextKey::YourCompany,
            FormField::Email => TextKey::YourEmail,
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing required fields: {}", keys(.0))]
    MissingFields(Vec<FormField>),

    #[error("Invalid email address")]
    InvalidEmail,
}

fn keys(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FormError {
    /// The message shown to the visitor, in the page's language.
    pub fn message(&self, bundle: &Bundle) -> String {
        match self {
            FormError::MissingFields(fields) => {
                let labels = fields
                    .iter()
                    .map(|field| field.label(bundle))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{} {}", bundle.text(TextKey::MissingFields), labels)
            }
            FormError::InvalidEmail => bundle.text(TextKey::InvalidEmail).to_string(),
        }
    }
}

/// Checks the `local@domain.tld` shape: one `@`, no whitespace, and a dot in
/// the domain with text on both sides.
///
/// # Examples
///
/// ```
/// use vitrine_core::forms::is_valid_email;
///
/// assert!(is_valid_email("buyer@example.com"));
/// assert!(!is_valid_email("buyer@example"));
/// assert!(!is_valid_email("buyer @example.com"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn check(required: &[(FormField, &str)], email: &str) -> Result<(), FormError> {
    let missing: Vec<FormField> = required
        .iter()
        .filter(|(_, value)| !value.should_render())
        .map(|(field, _)| *field)
        .collect();
    if !missing.is_empty() {
        return Err(FormError::MissingFields(missing));
    }
    if !is_valid_email(email.trim()) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

/// A request for quotation from a product page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RfqForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub quantity: String,
    pub requirements: String,
}

impl RfqForm {
    /// Name, company and email are required; the email must look valid.
    pub fn validate(&self) -> Result<(), FormError> {
        check(
            &[
                (FormField::Name, self.name.as_str()),
                (FormField::Company, self.company.as_str()),
                (FormField::Email, self.email.as_str()),
            ],
            &self.email,
        )
    }
}

/// A catalog or guide download request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub company: String,
}

impl LeadForm {
    /// Name and email are required; company is optional.
    pub fn validate(&self) -> Result<(), FormError> {
        check(
            &[(FormField::Name, self.name.as_str()), (FormField::Email, self.email.as_str())],
            &self.email,
        )
    }
}
