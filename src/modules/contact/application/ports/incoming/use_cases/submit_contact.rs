use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactFormState;
use crate::modules::contact::application::domain::validation::ValidationError;
use crate::modules::contact::application::services::status_reporter::SubmissionStatusView;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Carries the visitor-facing retry message, never the raw cause.
    #[error("{0}")]
    DeliveryFailed(String),

    #[error("Submission state error: {0}")]
    Internal(String),
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub submission_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatusView,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, form: ContactFormState)
        -> Result<SubmissionReceipt, SubmitContactError>;

    /// Name of the delivery backend, for readiness reporting.
    fn backend(&self) -> &'static str;
}
