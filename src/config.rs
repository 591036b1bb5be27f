use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::modules::contact::adapter::outgoing::emailjs_delivery::EMAILJS_SEND_URL;
use crate::modules::contact::application::domain::entities::DeliveryIdentifiers;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CONTENT_PATH: &str = "content/portfolio.json";
pub const DEFAULT_EMAIL_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOCAL_SMTP_PORT: u16 = 1025;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsSettings {
    pub api_url: String,
    pub private_key: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub server: String,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
    pub inbox: String,
}

/// Which collaborator receives contact submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryConfig {
    EmailJs(EmailJsSettings),
    Smtp(SmtpSettings),
    Log,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub content_path: String,
    pub identifiers: DeliveryIdentifiers,
    pub delivery: DeliveryConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let content_path =
            get("CONTENT_PATH").unwrap_or_else(|| DEFAULT_CONTENT_PATH.to_string());

        let backend = get("EMAIL_BACKEND").unwrap_or_else(|| "log".to_string());

        let (identifiers, delivery) = match backend.to_lowercase().as_str() {
            "emailjs" => {
                let identifiers = DeliveryIdentifiers::new(
                    require("EMAILJS_SERVICE_ID")?,
                    require("EMAILJS_TEMPLATE_ID")?,
                    require("EMAILJS_PUBLIC_KEY")?,
                );
                let timeout_secs = parse_or(
                    "EMAIL_TIMEOUT_SECS",
                    get("EMAIL_TIMEOUT_SECS"),
                    DEFAULT_EMAIL_TIMEOUT_SECS,
                )?;
                let settings = EmailJsSettings {
                    api_url: get("EMAILJS_API_URL")
                        .unwrap_or_else(|| EMAILJS_SEND_URL.to_string()),
                    private_key: get("EMAILJS_PRIVATE_KEY"),
                    timeout: Duration::from_secs(timeout_secs),
                };
                (identifiers, DeliveryConfig::EmailJs(settings))
            }
            "smtp" => {
                let port = get("SMTP_PORT")
                    .map(|raw| parse_value("SMTP_PORT", raw))
                    .transpose()?;
                let settings = SmtpSettings {
                    server: require("SMTP_SERVER")?,
                    port,
                    username: get("SMTP_USERNAME"),
                    password: get("SMTP_PASSWORD"),
                    from: require("EMAIL_FROM")?,
                    inbox: require("CONTACT_INBOX")?,
                };
                (optional_identifiers(&get), DeliveryConfig::Smtp(settings))
            }
            "log" => (optional_identifiers(&get), DeliveryConfig::Log),
            _ => {
                return Err(ConfigError::Invalid {
                    key: "EMAIL_BACKEND",
                    value: backend,
                })
            }
        };

        Ok(Self {
            host,
            port,
            content_path,
            identifiers,
            delivery,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn optional_identifiers(get: &dyn Fn(&str) -> Option<String>) -> DeliveryIdentifiers {
    DeliveryIdentifiers::new(
        get("EMAILJS_SERVICE_ID").unwrap_or_default(),
        get("EMAILJS_TEMPLATE_ID").unwrap_or_default(),
        get("EMAILJS_PUBLIC_KEY").unwrap_or_default(),
    )
}

fn parse_value<T: FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}

fn parse_or<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(raw) => parse_value(key, raw),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_local_logging_backend() {
        let cfg = config(&[]).unwrap();

        assert_eq!(cfg.host, DEFAULT_HOST);
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.content_path, DEFAULT_CONTENT_PATH);
        assert_eq!(cfg.delivery, DeliveryConfig::Log);
        assert_eq!(cfg.server_url(), "127.0.0.1:8080");
    }

    #[test]
    fn emailjs_backend_reads_identifiers() {
        let cfg = config(&[
            ("EMAIL_BACKEND", "emailjs"),
            ("EMAILJS_SERVICE_ID", "service_abc"),
            ("EMAILJS_TEMPLATE_ID", "template_def"),
            ("EMAILJS_PUBLIC_KEY", "public_ghi"),
            ("EMAIL_TIMEOUT_SECS", "3"),
        ])
        .unwrap();

        assert_eq!(
            cfg.identifiers,
            DeliveryIdentifiers::new("service_abc", "template_def", "public_ghi")
        );
        match cfg.delivery {
            DeliveryConfig::EmailJs(settings) => {
                assert!(settings.api_url.starts_with("https://api.emailjs.com"));
                assert_eq!(settings.timeout, Duration::from_secs(3));
                assert!(settings.private_key.is_none());
            }
            other => panic!("unexpected delivery config: {other:?}"),
        }
    }

    #[test]
    fn emailjs_backend_requires_identifiers() {
        let result = config(&[
            ("EMAIL_BACKEND", "emailjs"),
            ("EMAILJS_SERVICE_ID", "service_abc"),
            ("EMAILJS_TEMPLATE_ID", "   "),
        ]);

        assert_eq!(result, Err(ConfigError::Missing("EMAILJS_TEMPLATE_ID")));
    }

    #[test]
    fn smtp_backend_reads_mail_settings() {
        let cfg = config(&[
            ("EMAIL_BACKEND", "SMTP"),
            ("SMTP_SERVER", "localhost"),
            ("SMTP_PORT", "1025"),
            ("EMAIL_FROM", "site@example.com"),
            ("CONTACT_INBOX", "owner@example.com"),
        ])
        .unwrap();

        assert_eq!(
            cfg.delivery,
            DeliveryConfig::Smtp(SmtpSettings {
                server: "localhost".to_string(),
                port: Some(1025),
                username: None,
                password: None,
                from: "site@example.com".to_string(),
                inbox: "owner@example.com".to_string(),
            })
        );
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = config(&[("PORT", "eighty")]);

        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                key: "PORT",
                value: "eighty".to_string()
            })
        );
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let result = config(&[("EMAIL_BACKEND", "carrier-pigeon")]);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "EMAIL_BACKEND", .. })
        ));
    }
}
