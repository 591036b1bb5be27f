use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::modules::contact::application::ports::outgoing::contact_delivery::{
    ContactDelivery, ContactPayload, DeliveryError, DeliveryRequest,
};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Status code and body of a settled HTTP call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait EmailJsTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<TransportReply, DeliveryError>;
}

#[async_trait]
impl EmailJsTransport for Client {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<TransportReply, DeliveryError> {
        let response = self
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        Ok(TransportReply { status, body })
    }
}

#[derive(Serialize)]
struct SendEmailBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Delivers contact messages through the EmailJS REST API.
pub struct EmailJsDelivery {
    transport: Box<dyn EmailJsTransport>,
    api_url: String,
    private_key: Option<String>,
}

impl EmailJsDelivery {
    pub fn new_with_transport(
        transport: Box<dyn EmailJsTransport>,
        api_url: &str,
        private_key: Option<String>,
    ) -> Self {
        Self {
            transport,
            api_url: api_url.to_string(),
            private_key,
        }
    }

    pub fn new(
        api_url: &str,
        private_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DeliveryError::Misconfigured(e.to_string()))?;

        Ok(Self::new_with_transport(
            Box::new(client),
            api_url,
            private_key,
        ))
    }

    fn request_body(&self, request: &DeliveryRequest) -> Result<serde_json::Value, DeliveryError> {
        if request.service_id.is_empty()
            || request.template_id.is_empty()
            || request.public_key.is_empty()
        {
            return Err(DeliveryError::Misconfigured(
                "service id, template id and public key are required".to_string(),
            ));
        }

        serde_json::to_value(SendEmailBody {
            service_id: &request.service_id,
            template_id: &request.template_id,
            user_id: &request.public_key,
            template_params: &request.payload,
            access_token: self.private_key.as_deref(),
        })
        .map_err(|e| DeliveryError::Misconfigured(e.to_string()))
    }
}

#[async_trait]
impl ContactDelivery for EmailJsDelivery {
    fn backend(&self) -> &'static str {
        "emailjs"
    }

    async fn deliver(&self, request: &DeliveryRequest) -> Result<(), DeliveryError> {
        let body = self.request_body(request)?;

        let reply = self.transport.post_json(&self.api_url, &body).await?;
        debug!(status = reply.status, "EmailJS replied");

        match reply.status {
            200..=299 => Ok(()),
            401 | 403 => {
                warn!(status = reply.status, "EmailJS refused credentials");
                Err(DeliveryError::Unauthorized(reply.body))
            }
            status => Err(DeliveryError::Rejected {
                status,
                body: reply.body,
            }),
        }
    }
}
