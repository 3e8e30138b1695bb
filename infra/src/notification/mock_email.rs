//! Mock email channel for development and testing
//!
//! Logs passcodes instead of sending them and remembers the last code per
//! recipient so tests can complete the sign-in flow.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use sg_core::services::session::{mask_email, NotificationChannel};

/// Mock email channel
#[derive(Clone, Default)]
pub struct MockEmailChannel {
    /// Number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures
    simulate_failure: Arc<AtomicBool>,
    /// Last passcode per recipient
    outbox: Arc<Mutex<HashMap<String, String>>>,
}

impl MockEmailChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Last passcode sent to `email`
    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.outbox
            .lock()
            .ok()
            .and_then(|outbox| outbox.get(email).cloned())
    }
}

#[async_trait]
impl NotificationChannel for MockEmailChannel {
    async fn send_otp(&self, email: &str, code: &str) -> Result<String, String> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(email = %mask_email(email), "Mock email channel simulating failure");
            return Err("Simulated email delivery failure".to_string());
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        let message_id = format!("mock_{}", count);

        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.insert(email.to_string(), code.to_string());
        }

        info!(
            target: "email_service",
            provider = "mock",
            email = %mask_email(email),
            message_id = %message_id,
            code = %code,
            "Mock passcode email"
        );

        Ok(message_id)
    }
}
