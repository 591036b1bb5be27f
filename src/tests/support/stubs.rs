use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactFormState;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmissionReceipt, SubmitContactError, SubmitContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactDelivery, DeliveryError, DeliveryRequest,
};
use crate::modules::contact::application::services::SubmissionStatusView;

mock! {
    pub Delivery {}
    #[async_trait]
    impl ContactDelivery for Delivery {
        fn backend(&self) -> &'static str;
        async fn deliver(&self, request: &DeliveryRequest) -> Result<(), DeliveryError>;
    }
}

/// Accepts every submission without touching a delivery backend.
#[derive(Default, Clone)]
pub struct StubSubmitContactUseCase;

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(
        &self,
        _form: ContactFormState,
    ) -> Result<SubmissionReceipt, SubmitContactError> {
        Ok(SubmissionReceipt {
            submission_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            status: SubmissionStatusView {
                sent: true,
                error_message: None,
            },
        })
    }

    fn backend(&self) -> &'static str {
        "stub"
    }
}
