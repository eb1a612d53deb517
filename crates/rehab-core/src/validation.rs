//! Form validation that runs before any write or network call.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Return the trimmed value, or a validation error naming the field.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the value is missing or blank.
pub fn require<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, CoreError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CoreError::validation(format!("{field} is required")))
}

/// Loose shape check: one `@` with text on both sides, no whitespace.
///
/// Dotless domains such as `staff@localhost` pass, as they do in a browser
/// `type="email"` field.
#[must_use]
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
}

/// Raw public contact form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A contact form that passed validation; fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when name, email, or message is blank,
    /// or when the email is malformed.
    pub fn validate(&self) -> Result<ValidContactForm, CoreError> {
        let name = require(self.name.as_deref(), "Name")?;
        let email = require(self.email.as_deref(), "Email")?;
        if !is_plausible_email(email) {
            return Err(CoreError::validation("Please enter a valid email address"));
        }
        let message = require(self.message.as_deref(), "Message")?;

        let optional = |value: Option<&String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(ValidContactForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: optional(self.phone.as_ref()),
            subject: optional(self.subject.as_ref()),
            message: message.to_string(),
        })
    }
}

/// Admin login input checked before the credentials go to the auth provider.
///
/// # Errors
///
/// Returns `CoreError::Validation` when either field is blank or the email
/// has no `@`.
pub fn validate_login(email: &str, password: &str) -> Result<(), CoreError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(CoreError::validation("Please enter both email and password"));
    }
    if !email.contains('@') {
        return Err(CoreError::validation("Please enter a valid email address"));
    }
    Ok(())
}
