use serde::{Deserialize, Serialize};
use sg_core::domain::entities::otp::OtpIntent;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OtpRequest {
    #[validate(email)]
    pub email: String,

    /// "login" or "signup"
    pub intent: OtpIntent,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(email)]
    pub email: String,

    /// 6-digit passcode
    #[validate(length(equal = 6))]
    pub otp: String,

    pub intent: OtpIntent,

    /// Display name, required when signing up
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub admin_id: String,
    pub authority: Option<String>,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpRequestResponse {
    pub message: String,
    pub expires_in: u64, // seconds until the passcode expires
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerTokenResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub customer_id: String,
    pub created: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}
