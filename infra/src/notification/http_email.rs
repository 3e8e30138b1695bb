//! HTTP email channel
//!
//! Posts a JSON message to a transactional email provider's send endpoint
//! and returns the provider's message ID.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use sg_core::services::session::{mask_email, NotificationChannel};

use crate::config::EmailConfig;
use crate::InfrastructureError;

use super::{otp_message, OTP_SUBJECT};

/// Outbound message payload
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: String,
}

/// Provider response
#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    #[serde(alias = "message_id")]
    id: String,
}

/// Email channel backed by an HTTP provider API
pub struct HttpEmailChannel {
    client: Client,
    config: EmailConfig,
}

impl HttpEmailChannel {
    /// Create a new channel
    ///
    /// # Errors
    /// `InfrastructureError::Config` if the endpoint or key is missing
    pub fn new(config: EmailConfig) -> Result<Self, InfrastructureError> {
        if config.api_url.is_empty() {
            return Err(InfrastructureError::Config(
                "EMAIL_API_URL is required for the http email provider".to_string(),
            ));
        }
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "EMAIL_API_KEY is required for the http email provider".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }

    /// Send a plain-text email and return the provider message ID
    pub async fn send_email(
        &self,
        to: &str,
        subject: &str,
        text: String,
    ) -> Result<String, InfrastructureError> {
        let request = SendEmailRequest {
            from: &self.config.from_address,
            to,
            subject,
            text,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "Email provider rejected message");
            return Err(InfrastructureError::Email(format!(
                "provider returned {}: {}",
                status, body
            )));
        }

        let sent: SendEmailResponse = response.json().await?;
        Ok(sent.id)
    }
}

#[async_trait]
impl NotificationChannel for HttpEmailChannel {
    async fn send_otp(&self, email: &str, code: &str) -> Result<String, String> {
        let message_id = self
            .send_email(email, OTP_SUBJECT, otp_message(code))
            .await
            .map_err(|e| e.to_string())?;

        info!(
            target: "email_service",
            provider = "http",
            email = %mask_email(email),
            message_id = %message_id,
            "Passcode email sent"
        );
        Ok(message_id)
    }
}
