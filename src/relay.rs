//! Client for the third-party email relay that delivers contact-form messages.
//!
//! The relay speaks the EmailJS REST protocol: one JSON POST per message naming
//! the service, the template and the account's public key. A 2xx answer is the
//! acknowledgment; anything else carries a plain-text reason.

use std::time::Duration;

use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::contact::{ContactForm, DEFAULT_FAILURE_MESSAGE};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: "service_ee1qstu".to_string(),
            template_id: "template_0lh69zj".to_string(),
            public_key: "S7j8csOWxK-BtjDBa".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RelayConfig {
    /// Defaults, overridden by any `RELAY_*` environment variables that are set.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("RELAY_ENDPOINT") {
            self.endpoint = v;
        }
        if let Some(v) = lookup("RELAY_SERVICE_ID") {
            self.service_id = v;
        }
        if let Some(v) = lookup("RELAY_TEMPLATE_ID") {
            self.template_id = v;
        }
        if let Some(v) = lookup("RELAY_PUBLIC_KEY") {
            self.public_key = v;
        }
        if let Some(v) = lookup("RELAY_TIMEOUT_SECS") {
            match v.parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout = Duration::from_secs(secs),
                _ => log::warn!("ignoring RELAY_TIMEOUT_SECS={v:?}, expected a positive integer"),
            }
        }
        self
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

impl<'a> RelayRequest<'a> {
    pub fn new(config: &'a RelayConfig, form: &'a ContactForm) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: TemplateParams {
                from_name: &form.name,
                from_email: &form.email,
                subject: &form.subject,
                message: &form.message,
            },
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay rejected the message ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("couldn't reach the relay: {0}")]
    Transport(String),
    #[error("relay didn't answer within {0:?}")]
    Timeout(Duration),
}

impl RelayError {
    /// Text shown to the visitor: the relay's own reason if it gave one.
    pub fn user_message(&self) -> String {
        match self {
            RelayError::Rejected { message, .. } if !message.trim().is_empty() => {
                message.trim().to_string()
            }
            _ => DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[cfg(feature = "ssr")]
pub use client::RelayClient;

#[cfg(feature = "ssr")]
mod client {
    use super::*;

    #[derive(Debug, Clone)]
    pub struct RelayClient {
        config: RelayConfig,
        http: reqwest::Client,
    }

    impl RelayClient {
        pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
            let http = reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(|e| RelayError::Transport(e.to_string()))?;
            Ok(Self { config, http })
        }

        pub fn config(&self) -> &RelayConfig {
            &self.config
        }

        pub async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
            let request = RelayRequest::new(&self.config, form);
            let response = self
                .http
                .post(&self.config.endpoint)
                .json(&request)
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;

            let status = response.status();
            if status.is_success() {
                tracing::info!(from = %form.email, "relay accepted contact message");
                return Ok(());
            }
            let message = response
                .text()
                .await
                .map_err(|e| self.transport_error(e))?;
            tracing::warn!(%status, %message, "relay rejected contact message");
            Err(RelayError::Rejected { status, message })
        }

        fn transport_error(&self, e: reqwest::Error) -> RelayError {
            if e.is_timeout() {
                tracing::warn!(timeout = ?self.config.timeout, "relay request timed out");
                RelayError::Timeout(self.config.timeout)
            } else {
                tracing::warn!(error = %e, "relay request failed");
                RelayError::Transport(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn sample_form() -> ContactForm {
        ContactForm {
            name: "Jordan".to_string(),
            email: "jordan@example.com".to_string(),
            subject: "Project inquiry".to_string(),
            message: "I would like to discuss a project.".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let config = RelayConfig::default();
        let form = sample_form();
        let body = serde_json::to_value(RelayRequest::new(&config, &form)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_ee1qstu",
                "template_id": "template_0lh69zj",
                "user_id": "S7j8csOWxK-BtjDBa",
                "template_params": {
                    "from_name": "Jordan",
                    "from_email": "jordan@example.com",
                    "subject": "Project inquiry",
                    "message": "I would like to discuss a project.",
                }
            })
        );
    }

    #[test]
    fn test_env_overrides() {
        let env = HashMap::from([
            ("RELAY_SERVICE_ID", "service_other"),
            ("RELAY_TIMEOUT_SECS", "3"),
        ]);
        let config = RelayConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.service_id, "service_other");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.template_id, RelayConfig::default().template_id);
    }

    #[test]
    fn test_bad_timeout_is_ignored() {
        for bad in ["0", "soon", "-4"] {
            let config = RelayConfig::default().with_overrides(|key| {
                (key == "RELAY_TIMEOUT_SECS").then(|| bad.to_string())
            });
            assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        }
    }

    #[test]
    fn test_user_message() {
        let rejected = RelayError::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: "The Public Key is invalid".to_string(),
        };
        assert_eq!(rejected.user_message(), "The Public Key is invalid");

        let empty = RelayError::Rejected {
            status: StatusCode::BAD_GATEWAY,
            message: String::new(),
        };
        assert_eq!(empty.user_message(), DEFAULT_FAILURE_MESSAGE);
        assert_eq!(
            RelayError::Transport("connection refused".to_string()).user_message(),
            DEFAULT_FAILURE_MESSAGE
        );
        assert_eq!(
            RelayError::Timeout(DEFAULT_TIMEOUT).user_message(),
            DEFAULT_FAILURE_MESSAGE
        );
    }

    #[cfg(feature = "ssr")]
    mod live {
        use httpmock::prelude::*;

        use super::*;

        fn client_for(server: &MockServer, timeout: Duration) -> RelayClient {
            RelayClient::new(RelayConfig {
                endpoint: server.url("/api/v1.0/email/send"),
                timeout,
                ..RelayConfig::default()
            })
            .unwrap()
        }

        #[tokio::test]
        async fn test_send_acknowledged() {
            let server = MockServer::start_async().await;
            let mock = server
                .mock_async(|when, then| {
                    when.method(POST)
                        .path("/api/v1.0/email/send")
                        .header("content-type", "application/json")
                        .json_body(serde_json::json!({
                            "service_id": "service_ee1qstu",
                            "template_id": "template_0lh69zj",
                            "user_id": "S7j8csOWxK-BtjDBa",
                            "template_params": {
                                "from_name": "Jordan",
                                "from_email": "jordan@example.com",
                                "subject": "Project inquiry",
                                "message": "I would like to discuss a project.",
                            }
                        }));
                    then.status(200).body("OK");
                })
                .await;

            let client = client_for(&server, DEFAULT_TIMEOUT);
            assert_eq!(client.send(&sample_form()).await, Ok(()));
            mock.assert_async().await;
        }

        #[tokio::test]
        async fn test_send_rejected() {
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(POST).path("/api/v1.0/email/send");
                    then.status(400).body("The service ID is invalid");
                })
                .await;

            let client = client_for(&server, DEFAULT_TIMEOUT);
            let err = client.send(&sample_form()).await.unwrap_err();
            assert_eq!(
                err,
                RelayError::Rejected {
                    status: StatusCode::BAD_REQUEST,
                    message: "The service ID is invalid".to_string(),
                }
            );
            assert_eq!(err.user_message(), "The service ID is invalid");
        }

        #[tokio::test]
        async fn test_send_times_out() {
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(POST);
                    then.status(200).delay(Duration::from_millis(500));
                })
                .await;

            let timeout = Duration::from_millis(50);
            let client = client_for(&server, timeout);
            let err = client.send(&sample_form()).await.unwrap_err();
            assert_eq!(err, RelayError::Timeout(timeout));
        }

        #[tokio::test]
        async fn test_send_unreachable() {
            let client = RelayClient::new(RelayConfig {
                endpoint: "http://127.0.0.1:1/api/v1.0/email/send".to_string(),
                ..RelayConfig::default()
            })
            .unwrap();
            let err = client.send(&sample_form()).await.unwrap_err();
            assert!(matches!(err, RelayError::Transport(_)), "got {err:?}");
        }
    }
}
