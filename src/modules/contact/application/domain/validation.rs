use email_address::EmailAddress;

use crate::modules::contact::application::domain::entities::{ContactField, ContactFormState};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Message cannot be empty")]
    EmptyMessage,
}

impl ValidationError {
    pub fn field(&self) -> ContactField {
        match self {
            ValidationError::EmptyName => ContactField::Name,
            ValidationError::EmptyEmail | ValidationError::InvalidEmailFormat => {
                ContactField::Email
            }
            ValidationError::EmptyMessage => ContactField::Message,
        }
    }
}

/// Checks the form in field order and reports the first problem found.
/// Whitespace-only input counts as empty.
pub fn validate_form(form: &ContactFormState) -> Result<(), ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let email = form.email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if !EmailAddress::is_valid(email) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    if form.message.trim().is_empty() {
        return Err(ValidationError::EmptyMessage);
    }

    Ok(())
}
