pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::contact;
pub use modules::content;
pub use modules::navigation;
pub use modules::page;
pub use modules::theme;

use crate::config::{DeliveryConfig, DEFAULT_LOCAL_SMTP_PORT};
use crate::contact::adapter::outgoing::emailjs_delivery::EmailJsDelivery;
use crate::contact::adapter::outgoing::logging_delivery::LoggingDelivery;
use crate::contact::adapter::outgoing::smtp_delivery::SmtpDelivery;
use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::contact::application::ports::outgoing::{ContactDelivery, DeliveryError};
use crate::content::application::services::ContentRegistry;
use crate::navigation::application::SmoothScrollNavigator;

use actix_web::web;
use std::sync::Arc;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentRegistry>,
    pub navigator: Arc<SmoothScrollNavigator>,
    pub submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
}

/// Builds the delivery collaborator selected by configuration.
pub fn build_delivery(config: &DeliveryConfig) -> Result<Arc<dyn ContactDelivery>, DeliveryError> {
    let delivery: Arc<dyn ContactDelivery> = match config {
        DeliveryConfig::EmailJs(settings) => Arc::new(EmailJsDelivery::new(
            &settings.api_url,
            settings.private_key.clone(),
            settings.timeout,
        )?),
        DeliveryConfig::Smtp(settings) => match (&settings.username, &settings.password) {
            (Some(username), Some(password)) => Arc::new(SmtpDelivery::new(
                &settings.server,
                username,
                password,
                &settings.from,
                &settings.inbox,
            )?),
            // Local relay (Mailpit, MailHog, etc.)
            _ => Arc::new(SmtpDelivery::new_local(
                &settings.server,
                settings.port.unwrap_or(DEFAULT_LOCAL_SMTP_PORT),
                &settings.from,
                &settings.inbox,
            )),
        },
        DeliveryConfig::Log => Arc::new(LoggingDelivery::new()),
    };

    Ok(delivery)
}

#[cfg(not(tarpaulin_include))]
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Docs
    cfg.service(crate::api::openapi::openapi_json);
    // Content
    cfg.service(crate::content::adapter::incoming::web::routes::get_content_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_tools_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_timeline_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_testimonials_handler);
    // Navigation
    cfg.service(crate::navigation::adapter::incoming::web::routes::get_navigation_handler);
    cfg.service(crate::navigation::adapter::incoming::web::routes::scroll_to_section_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(test)]
mod delivery_selection_tests {
    use super::*;
    use crate::config::{EmailJsSettings, SmtpSettings};
    use std::time::Duration;

    #[tokio::test]
    async fn log_config_builds_logging_delivery() {
        let delivery = build_delivery(&DeliveryConfig::Log).unwrap();
        assert_eq!(delivery.backend(), "log");
    }

    #[tokio::test]
    async fn emailjs_config_builds_emailjs_delivery() {
        let delivery = build_delivery(&DeliveryConfig::EmailJs(EmailJsSettings {
            api_url: "http://127.0.0.1:9/send".to_string(),
            private_key: None,
            timeout: Duration::from_secs(1),
        }))
        .unwrap();

        assert_eq!(delivery.backend(), "emailjs");
    }

    #[tokio::test]
    async fn smtp_config_without_credentials_uses_local_relay() {
        let delivery = build_delivery(&DeliveryConfig::Smtp(SmtpSettings {
            server: "127.0.0.1".to_string(),
            port: None,
            username: None,
            password: None,
            from: "site@example.com".to_string(),
            inbox: "owner@example.com".to_string(),
        }))
        .unwrap();

        assert_eq!(delivery.backend(), "smtp");
    }
}
