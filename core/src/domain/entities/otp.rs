//! One-time passcode entity for customer email sign-in.

use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of digits in a passcode
pub const OTP_LENGTH: usize = 6;

/// Passcode lifetime in the ephemeral store (10 minutes)
pub const OTP_TTL_SECONDS: u64 = 600;

/// What a customer intends to do with a passcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpIntent {
    /// Sign in to an existing account
    Login,
    /// Create a new account
    Signup,
}

impl OtpIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            OtpIntent::Login => "login",
            OtpIntent::Signup => "signup",
        }
    }
}

impl std::fmt::Display for OtpIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generates a decimal passcode of `length` digits from the OS CSPRNG
pub fn generate_otp(length: usize) -> String {
    let mut rng = OsRng;
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_is_numeric() {
        let code = generate_otp(OTP_LENGTH);
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_intent_serialization() {
        assert_eq!(serde_json::to_value(OtpIntent::Signup).unwrap(), "signup");
        let intent: OtpIntent = serde_json::from_str("\"login\"").unwrap();
        assert_eq!(intent, OtpIntent::Login);
    }
}
