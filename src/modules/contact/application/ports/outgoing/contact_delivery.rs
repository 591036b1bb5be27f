use async_trait::async_trait;
use serde::Serialize;

use crate::modules::contact::application::domain::entities::{
    ContactFormState, DeliveryIdentifiers,
};

/// Template parameters sent to the delivery service. Field names match the
/// contact form's input names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

impl From<&ContactFormState> for ContactPayload {
    fn from(form: &ContactFormState) -> Self {
        Self {
            user_name: form.name.trim().to_string(),
            user_email: form.email.trim().to_string(),
            message: form.message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub payload: ContactPayload,
}

impl DeliveryRequest {
    pub fn new(identifiers: &DeliveryIdentifiers, payload: ContactPayload) -> Self {
        Self {
            service_id: identifiers.service_id.clone(),
            template_id: identifiers.template_id.clone(),
            public_key: identifiers.public_key.clone(),
            payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Delivery service refused credentials: {0}")]
    Unauthorized(String),

    #[error("Delivery service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Delivery misconfigured: {0}")]
    Misconfigured(String),
}

#[async_trait]
pub trait ContactDelivery: Send + Sync {
    /// Short backend name used in logs and readiness output.
    fn backend(&self) -> &'static str;

    async fn deliver(&self, request: &DeliveryRequest) -> Result<(), DeliveryError>;
}
