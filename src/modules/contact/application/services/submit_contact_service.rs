use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{
    ContactField, ContactFormState, DeliveryIdentifiers, SubmissionStatus,
};
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmissionReceipt, SubmitContactError, SubmitContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::contact_delivery::ContactDelivery;
use crate::modules::contact::application::services::form_controller::{
    ContactFormController, SubmitError,
};

// ============================================================================
// Service Implementation
// ============================================================================

/// Runs each incoming submission through its own [`ContactFormController`].
pub struct SubmitContactService {
    delivery: Arc<dyn ContactDelivery>,
    identifiers: DeliveryIdentifiers,
}

impl SubmitContactService {
    pub fn new(delivery: Arc<dyn ContactDelivery>, identifiers: DeliveryIdentifiers) -> Self {
        Self {
            delivery,
            identifiers,
        }
    }

    fn controller_for(&self, form: ContactFormState) -> Result<ContactFormController, SubmitContactError> {
        let mut controller =
            ContactFormController::new(Arc::clone(&self.delivery), self.identifiers.clone());

        let ContactFormState {
            name,
            email,
            message,
        } = form;
        for (field, value) in [
            (ContactField::Name, name),
            (ContactField::Email, email),
            (ContactField::Message, message),
        ] {
            controller
                .update_field(field, value)
                .map_err(|e| SubmitContactError::Internal(e.to_string()))?;
        }

        Ok(controller)
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(
        &self,
        form: ContactFormState,
    ) -> Result<SubmissionReceipt, SubmitContactError> {
        let submission_id = Uuid::new_v4();
        let span = info_span!("contact_submission", %submission_id, backend = self.delivery.backend());

        async move {
            let mut controller = self.controller_for(form)?;

            let status = controller.submit().await.map_err(|e| match e {
                SubmitError::Validation(v) => SubmitContactError::Validation(v),
                other => SubmitContactError::Internal(other.to_string()),
            })?;

            match status {
                SubmissionStatus::Failed(reason) => Err(SubmitContactError::DeliveryFailed(reason)),
                _ => {
                    info!("Contact submission completed");
                    Ok(SubmissionReceipt {
                        submission_id,
                        submitted_at: Utc::now(),
                        status: controller.status_view(),
                    })
                }
            }
        }
        .instrument(span)
        .await
    }

    fn backend(&self) -> &'static str {
        self.delivery.backend()
    }
}
