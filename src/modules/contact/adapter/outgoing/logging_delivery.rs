use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tracing::info;

use crate::modules::contact::application::ports::outgoing::contact_delivery::{
    ContactDelivery, DeliveryError, DeliveryRequest,
};

/// Local-development backend: logs each submission instead of calling a real
/// email service. Message contents are never logged, and nothing is retained
/// unless the sink was built with [`LoggingDelivery::recording`].
#[derive(Clone, Default)]
pub struct LoggingDelivery {
    recorded: Option<Arc<Mutex<Vec<DeliveryRequest>>>>,
    failure: Option<DeliveryError>,
}

impl LoggingDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that keeps every delivered request, for inspection.
    pub fn recording() -> Self {
        Self {
            recorded: Some(Arc::new(Mutex::new(Vec::new()))),
            failure: None,
        }
    }

    /// A sink that rejects every submission with `error`.
    pub fn failing(error: DeliveryError) -> Self {
        Self {
            recorded: None,
            failure: Some(error),
        }
    }

    /// Requests kept by a recording sink. Always empty otherwise.
    pub fn delivered(&self) -> Vec<DeliveryRequest> {
        self.recorded
            .as_ref()
            .and_then(|recorded| recorded.lock().ok().map(|guard| guard.clone()))
            .unwrap_or_default()
    }
}

#[async_trait]
impl ContactDelivery for LoggingDelivery {
    fn backend(&self) -> &'static str {
        "log"
    }

    async fn deliver(&self, request: &DeliveryRequest) -> Result<(), DeliveryError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        // Runs inside the submission span, which carries the submission id.
        info!(
            message_len = request.payload.message.len(),
            "Contact message received (log backend)"
        );

        if let Some(recorded) = &self.recorded {
            recorded
                .lock()
                .map_err(|e| DeliveryError::Misconfigured(e.to_string()))?
                .push(request.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::domain::entities::DeliveryIdentifiers;
    use crate::modules::contact::application::ports::outgoing::contact_delivery::ContactPayload;

    fn request() -> DeliveryRequest {
        DeliveryRequest::new(
            &DeliveryIdentifiers::new("svc", "tpl", "key"),
            ContactPayload {
                user_name: "Ada".to_string(),
                user_email: "ada@example.com".to_string(),
                message: "Hello".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn recording_sink_keeps_delivered_requests() {
        let delivery = LoggingDelivery::recording();

        delivery.deliver(&request()).await.unwrap();

        assert_eq!(delivery.delivered(), vec![request()]);
        assert_eq!(delivery.backend(), "log");
    }

    #[tokio::test]
    async fn default_sink_retains_nothing() {
        let delivery = LoggingDelivery::new();

        for _ in 0..1000 {
            delivery.deliver(&request()).await.unwrap();
        }

        assert!(delivery.delivered().is_empty());
    }

    #[tokio::test]
    async fn default_config_delivers_through_log_backend() {
        use crate::config::AppConfig;
        use crate::modules::contact::application::domain::entities::ContactFormState;
        use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
        use crate::modules::contact::application::services::SubmitContactService;

        let config = AppConfig::from_lookup(|_| None).unwrap();
        let service = SubmitContactService::new(
            crate::build_delivery(&config.delivery).unwrap(),
            config.identifiers,
        );

        for _ in 0..100 {
            let receipt = service
                .execute(ContactFormState::new("Ada", "ada@example.com", "Hello"))
                .await
                .unwrap();
            assert!(receipt.status.sent);
        }

        assert_eq!(service.backend(), "log");
    }

    #[tokio::test]
    async fn failing_sink_returns_configured_error() {
        let delivery = LoggingDelivery::failing(DeliveryError::Network("timeout".to_string()));

        let result = delivery.deliver(&request()).await;

        assert_eq!(result, Err(DeliveryError::Network("timeout".to_string())));
        assert!(delivery.delivered().is_empty());
    }
}
