use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three contact-form inputs. Every field is always present and
/// defaults to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactFormState {
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Hello")]
    pub message: String,
}

impl ContactFormState {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Lifecycle of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Sent,
    Failed {
        reason: String,
    },
}

impl FormPhase {
    pub fn accepts_edits(&self) -> bool {
        !matches!(self, FormPhase::Submitting)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, FormPhase::Submitting)
    }
}

/// Outcome of the last submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sent,
    Failed(String),
}

impl From<&FormPhase> for SubmissionStatus {
    fn from(phase: &FormPhase) -> Self {
        match phase {
            FormPhase::Editing | FormPhase::Submitting => SubmissionStatus::Idle,
            FormPhase::Sent => SubmissionStatus::Sent,
            FormPhase::Failed { reason } => SubmissionStatus::Failed(reason.clone()),
        }
    }
}

/// Deployment-supplied identifiers passed to the delivery service with
/// every submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryIdentifiers {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl DeliveryIdentifiers {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }
}
