//! Notification module for passcode delivery
//!
//! - `http_email` - Transactional email provider reached over HTTPS
//! - `mock_email` - Logs passcodes instead of sending them

pub mod http_email;
pub mod mock_email;

use async_trait::async_trait;
use tracing::info;

use sg_core::services::session::NotificationChannel;

use crate::config::EmailConfig;
use crate::InfrastructureError;

pub use http_email::HttpEmailChannel;
pub use mock_email::MockEmailChannel;

/// Subject line of passcode emails
pub const OTP_SUBJECT: &str = "Your Storegate verification code";

/// Plain-text body of a passcode email
pub fn otp_message(code: &str) -> String {
    format!(
        "Your Storegate verification code is {}. It expires in 10 minutes. \
         If you did not request it, you can ignore this email.",
        code
    )
}

/// Email channel selected from configuration at startup
pub enum EmailChannel {
    Http(HttpEmailChannel),
    Mock(MockEmailChannel),
}

impl EmailChannel {
    /// Build the configured channel
    ///
    /// The mock channel is used when the provider is `mock` or the
    /// `mock-services` feature is enabled.
    pub fn from_config(config: EmailConfig) -> Result<Self, InfrastructureError> {
        if config.is_mock() {
            info!("Using mock email channel");
            return Ok(EmailChannel::Mock(MockEmailChannel::new()));
        }

        info!(provider = %config.provider, "Using HTTP email channel");
        HttpEmailChannel::new(config).map(EmailChannel::Http)
    }
}

#[async_trait]
impl NotificationChannel for EmailChannel {
    async fn send_otp(&self, email: &str, code: &str) -> Result<String, String> {
        match self {
            EmailChannel::Http(channel) => channel.send_otp(email, code).await,
            EmailChannel::Mock(channel) => channel.send_otp(email, code).await,
        }
    }
}
