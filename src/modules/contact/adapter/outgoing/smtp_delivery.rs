use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::modules::contact::application::ports::outgoing::contact_delivery::{
    ContactDelivery, DeliveryError, DeliveryRequest,
};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), DeliveryError>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), DeliveryError> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| {
                if e.is_permanent() {
                    DeliveryError::Rejected {
                        status: 550,
                        body: e.to_string(),
                    }
                } else {
                    DeliveryError::Network(e.to_string())
                }
            })
    }
}

/// Relays contact messages to the site owner's inbox over SMTP, with the
/// visitor's address as `Reply-To`.
pub struct SmtpDelivery {
    mailer: Box<dyn Mailer>,
    from_email: String,
    inbox: String,
}

impl SmtpDelivery {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str, inbox: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
            inbox: inbox.to_string(),
        }
    }

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
        inbox: &str,
    ) -> Result<Self, DeliveryError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| DeliveryError::Misconfigured(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email, inbox))
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str, inbox: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email, inbox)
    }

    fn build_message(&self, request: &DeliveryRequest) -> Result<Message, DeliveryError> {
        let payload = &request.payload;
        let invalid = |e: lettre::address::AddressError| {
            DeliveryError::Misconfigured(format!("Invalid address: {}", e))
        };

        Message::builder()
            .from(self.from_email.parse().map_err(invalid)?)
            .reply_to(payload.user_email.parse().map_err(|e| {
                DeliveryError::Rejected {
                    status: 400,
                    body: format!("Invalid reply-to address: {}", e),
                }
            })?)
            .to(self.inbox.parse().map_err(invalid)?)
            .subject(format!("Portfolio contact from {}", payload.user_name))
            .header(ContentType::TEXT_PLAIN)
            .body(format!(
                "Name: {}\nEmail: {}\n\n{}",
                payload.user_name, payload.user_email, payload.message
            ))
            .map_err(|e| DeliveryError::Misconfigured(e.to_string()))
    }
}

#[async_trait]
impl ContactDelivery for SmtpDelivery {
    fn backend(&self) -> &'static str {
        "smtp"
    }

    async fn deliver(&self, request: &DeliveryRequest) -> Result<(), DeliveryError> {
        let email = self.build_message(request)?;
        self.mailer.send(email).await
    }
}
