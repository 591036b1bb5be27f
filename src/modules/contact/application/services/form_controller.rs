use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::modules::contact::application::domain::entities::{
    ContactField, ContactFormState, DeliveryIdentifiers, FormPhase, SubmissionStatus,
};
use crate::modules::contact::application::domain::validation::{validate_form, ValidationError};
use crate::modules::contact::application::ports::outgoing::contact_delivery::{
    ContactDelivery, ContactPayload, DeliveryError, DeliveryRequest,
};
use crate::modules::contact::application::services::status_reporter::SubmissionStatusView;

/// Shown to the visitor whenever delivery fails, whatever the cause.
pub const DELIVERY_FAILURE_MESSAGE: &str = "Failed to send. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("The form cannot be edited while a submission is in flight")]
    Locked,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A submission is already in flight")]
    AlreadyInFlight,

    #[error("No submission is in flight")]
    NotInFlight,
}

/// Owns the contact form and drives a submission through
/// Editing -> Submitting -> Sent | Failed.
///
/// At most one submission is in flight per controller. A failed attempt keeps
/// the entered values so the visitor can retry; a successful one clears them.
pub struct ContactFormController {
    form: ContactFormState,
    phase: FormPhase,
    delivery: Arc<dyn ContactDelivery>,
    identifiers: DeliveryIdentifiers,
}

impl fmt::Debug for ContactFormController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactFormController")
            .field("form", &self.form)
            .field("phase", &self.phase)
            .field("delivery", &self.delivery.backend())
            .finish()
    }
}

impl ContactFormController {
    pub fn new(delivery: Arc<dyn ContactDelivery>, identifiers: DeliveryIdentifiers) -> Self {
        Self {
            form: ContactFormState::default(),
            phase: FormPhase::Editing,
            delivery,
            identifiers,
        }
    }

    pub fn form(&self) -> &ContactFormState {
        &self.form
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn status(&self) -> SubmissionStatus {
        SubmissionStatus::from(&self.phase)
    }

    pub fn status_view(&self) -> SubmissionStatusView {
        SubmissionStatusView::from(&self.status())
    }

    /// Overwrites one field. Typing after a successful send starts a fresh
    /// draft, so the phase drops back to Editing.
    pub fn update_field(
        &mut self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        if !self.phase.accepts_edits() {
            return Err(FormError::Locked);
        }
        if self.phase == FormPhase::Sent {
            self.phase = FormPhase::Editing;
        }
        self.form.set(field, value.into());
        Ok(())
    }

    /// Validates the form and, on success, enters Submitting and returns the
    /// request to hand to the delivery collaborator. On failure nothing
    /// changes.
    pub fn begin_submit(&mut self) -> Result<DeliveryRequest, SubmitError> {
        if self.phase.is_submitting() {
            return Err(SubmitError::AlreadyInFlight);
        }

        if let Err(e) = validate_form(&self.form) {
            debug!(field = %e.field(), error = %e, "Contact form failed validation");
            return Err(e.into());
        }

        self.phase = FormPhase::Submitting;
        Ok(DeliveryRequest::new(
            &self.identifiers,
            ContactPayload::from(&self.form),
        ))
    }

    /// Applies the settled outcome of the in-flight submission.
    pub fn complete_submit(
        &mut self,
        outcome: Result<(), DeliveryError>,
    ) -> Result<SubmissionStatus, SubmitError> {
        if !self.phase.is_submitting() {
            return Err(SubmitError::NotInFlight);
        }

        match outcome {
            Ok(()) => {
                info!(backend = self.delivery.backend(), "Contact message delivered");
                self.form.clear();
                self.phase = FormPhase::Sent;
            }
            Err(e) => {
                error!(backend = self.delivery.backend(), error = %e, "Contact message delivery failed");
                self.phase = FormPhase::Failed {
                    reason: DELIVERY_FAILURE_MESSAGE.to_string(),
                };
            }
        }

        Ok(self.status())
    }

    /// Validates, delivers once, and settles the outcome.
    pub async fn submit(&mut self) -> Result<SubmissionStatus, SubmitError> {
        let request = self.begin_submit()?;
        let delivery = Arc::clone(&self.delivery);
        let outcome = delivery.deliver(&request).await;
        self.complete_submit(outcome)
    }
}
