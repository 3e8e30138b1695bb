//! Main session service implementation

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use tracing::{error, info, warn};

use crate::domain::entities::otp::{generate_otp, OtpIntent};
use crate::domain::entities::principal::{Customer, PrincipalSnapshot, Role};
use crate::domain::value_objects::{IssuedSession, OtpDispatch};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{
    AccountDirectory, AdminRepository, CustomerRepository, PrincipalStore,
};
use crate::services::token::TokenService;

use super::config::SessionServiceConfig;
use super::email::{mask_email, normalize_email};
use super::traits::{NotificationChannel, OtpStore, PasswordVerifier};

/// Issues session tokens after a principal proves who they are
///
/// Administrators prove themselves with a password, customers with an
/// emailed one-time passcode. Every successful login increments the
/// principal's generation and embeds the new value, so each login makes
/// all earlier tokens of that principal obsolete.
pub struct SessionService<A, C, P, O, N>
where
    A: AdminRepository,
    C: CustomerRepository,
    P: PasswordVerifier,
    O: OtpStore,
    N: NotificationChannel,
{
    /// Administrator and customer stores
    directory: AccountDirectory<A, C>,
    /// Token signing
    token_service: Arc<TokenService>,
    /// Password hash checking
    password_verifier: Arc<P>,
    /// Pending passcodes
    otp_store: Arc<O>,
    /// Passcode delivery
    notifier: Arc<N>,
    /// Service configuration
    config: SessionServiceConfig,
}

impl<A, C, P, O, N> SessionService<A, C, P, O, N>
where
    A: AdminRepository,
    C: CustomerRepository,
    P: PasswordVerifier,
    O: OtpStore,
    N: NotificationChannel,
{
    /// Create a new session service
    ///
    /// # Arguments
    ///
    /// * `directory` - Administrator and customer stores
    /// * `token_service` - Service for signing tokens
    /// * `password_verifier` - Checks administrator passwords
    /// * `otp_store` - Ephemeral passcode storage
    /// * `notifier` - Delivers passcodes to customers
    /// * `config` - Lifetimes and passcode settings
    pub fn new(
        directory: AccountDirectory<A, C>,
        token_service: Arc<TokenService>,
        password_verifier: Arc<P>,
        otp_store: Arc<O>,
        notifier: Arc<N>,
        config: SessionServiceConfig,
    ) -> Self {
        Self {
            directory,
            token_service,
            password_verifier,
            otp_store,
            notifier,
            config,
        }
    }

    /// Log an administrator in with email and password
    ///
    /// Preconditions are checked in order: missing input, unknown email,
    /// disabled account, wrong password. None of these failures writes to
    /// the store. On success the generation is incremented atomically and
    /// the token embeds the new value.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedSession)` - Token valid for the admin lifetime
    /// * `Err(DomainError)` - `MissingField`, `PrincipalNotFound`,
    ///   `AccountDisabled`, `InvalidCredentials` or a store failure
    pub async fn admin_login(&self, email: &str, password: &str) -> DomainResult<IssuedSession> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AuthError::missing("email").into());
        }
        if password.is_empty() {
            return Err(AuthError::missing("password").into());
        }

        let admins = self.directory.admins();
        let admin = admins
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AuthError::not_found(Role::Admin))?;

        if !admin.active {
            warn!(email = %mask_email(&email), "Login attempt on disabled admin account");
            return Err(AuthError::AccountDisabled.into());
        }

        let matches = self
            .password_verifier
            .verify(password, &admin.password_hash)
            .await
            .map_err(|e| DomainError::internal(format!("password verification failed: {}", e)))?;
        if !matches {
            warn!(email = %mask_email(&email), "Admin password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        let generation = self.next_generation(admins, &admin.id, Role::Admin).await?;
        let snapshot = PrincipalSnapshot::new(admin.id.clone(), Role::Admin, generation)
            .with_authority(admin.authority.clone());
        let token = self
            .token_service
            .issue(&snapshot, self.config.admin_token_lifetime)?;

        info!(admin_id = %admin.id, generation, "Admin session issued");

        Ok(IssuedSession::new(
            token,
            self.config.admin_token_lifetime,
            admin.id,
            Role::Admin,
            generation,
        )
        .with_authority(snapshot.authority))
    }

    /// Generate and email a one-time passcode
    ///
    /// `Login` requires an existing active customer, `Signup` requires that
    /// no customer exists yet. Only one passcode may be pending per email.
    ///
    /// # Arguments
    ///
    /// * `email` - Customer email address (normalized before use)
    /// * `intent` - Whether the passcode will be used to log in or sign up
    pub async fn request_customer_otp(&self, email: &str, intent: OtpIntent) -> DomainResult<OtpDispatch> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AuthError::missing("email").into());
        }

        let existing = self.directory.customers().find_by_email(&email).await?;
        match (intent, existing) {
            (OtpIntent::Login, None) => return Err(AuthError::not_found(Role::Customer).into()),
            (OtpIntent::Login, Some(customer)) if !customer.active => {
                return Err(AuthError::AccountDisabled.into())
            }
            (OtpIntent::Signup, Some(_)) => return Err(AuthError::DuplicateEmail.into()),
            _ => {}
        }

        let code = generate_otp(self.config.otp_length);
        let stored = self
            .otp_store
            .store_if_absent(&email, &code, self.config.otp_ttl_seconds)
            .await
            .map_err(|e| DomainError::internal(format!("otp store failure: {}", e)))?;
        if !stored {
            return Err(AuthError::OtpAlreadyPending.into());
        }

        let message_id = match self.notifier.send_otp(&email, &code).await {
            Ok(message_id) => message_id,
            Err(e) => {
                error!(email = %mask_email(&email), error = %e, "Passcode delivery failed");
                if let Err(e) = self.otp_store.remove(&email).await {
                    error!(error = %e, "Failed to discard undelivered passcode");
                }
                return Err(AuthError::NotificationFailed.into());
            }
        };

        info!(email = %mask_email(&email), intent = %intent, "Passcode sent");

        Ok(OtpDispatch {
            expires_in: self.config.otp_ttl_seconds,
            message_id,
        })
    }

    /// Verify a passcode and issue a customer session
    ///
    /// A matching passcode is consumed atomically before the intent is
    /// acted on, so concurrent verifications of one passcode yield a single
    /// session and `OtpNotFound` for the rest. A mismatch leaves it in place
    /// so the customer can retry until it expires. For `Login` the generation is incremented and embedded;
    /// for `Signup` the customer is created at generation zero and that
    /// creation counts as the issuance event, so no increment follows.
    ///
    /// # Arguments
    ///
    /// * `email` - Customer email address (normalized before use)
    /// * `code` - Passcode the customer received
    /// * `intent` - Login or signup
    /// * `name` - Display name, required for signup
    pub async fn verify_customer_otp(
        &self,
        email: &str,
        code: &str,
        intent: OtpIntent,
        name: Option<&str>,
    ) -> DomainResult<IssuedSession> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AuthError::missing("email").into());
        }
        let code = code.trim();
        if code.is_empty() {
            return Err(AuthError::missing("otp").into());
        }
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        if intent == OtpIntent::Signup && name.is_none() {
            return Err(AuthError::missing("name").into());
        }

        let stored = self
            .otp_store
            .fetch(&email)
            .await
            .map_err(|e| DomainError::internal(format!("otp store failure: {}", e)))?
            .ok_or(AuthError::OtpNotFound)?;

        if !constant_time_eq(stored.as_bytes(), code.as_bytes()) {
            warn!(email = %mask_email(&email), "Passcode mismatch");
            return Err(AuthError::OtpMismatch.into());
        }

        let consumed = self
            .otp_store
            .consume(&email, &stored)
            .await
            .map_err(|e| DomainError::internal(format!("otp store failure: {}", e)))?;
        if !consumed {
            // Redeemed by a concurrent verification between fetch and consume
            return Err(AuthError::OtpNotFound.into());
        }

        let customers = self.directory.customers();
        match intent {
            OtpIntent::Login => {
                let customer = customers
                    .find_by_email(&email)
                    .await?
                    .ok_or_else(|| AuthError::not_found(Role::Customer))?;
                if !customer.active {
                    return Err(AuthError::AccountDisabled.into());
                }

                let generation = self
                    .next_generation(customers, &customer.id, Role::Customer)
                    .await?;
                let session = self.issue_customer(&customer.id, generation)?;
                info!(customer_id = %customer.id, generation, "Customer session issued");
                Ok(session)
            }
            OtpIntent::Signup => {
                if customers.find_by_email(&email).await?.is_some() {
                    return Err(AuthError::DuplicateEmail.into());
                }

                let name = name.unwrap_or_default();
                let customer = customers.create(Customer::new(email, name)).await?;
                let session = self
                    .issue_customer(&customer.id, customer.generation)?
                    .with_created(true);
                info!(customer_id = %customer.id, "Customer account created");
                Ok(session)
            }
        }
    }

    fn issue_customer(&self, customer_id: &str, generation: u64) -> DomainResult<IssuedSession> {
        let snapshot = PrincipalSnapshot::new(customer_id, Role::Customer, generation);
        let token = self
            .token_service
            .issue(&snapshot, self.config.customer_token_lifetime)?;

        Ok(IssuedSession::new(
            token,
            self.config.customer_token_lifetime,
            customer_id.to_string(),
            Role::Customer,
            generation,
        ))
    }

    async fn next_generation(
        &self,
        store: &dyn PrincipalStore,
        id: &str,
        role: Role,
    ) -> DomainResult<u64> {
        store
            .increment_generation(id)
            .await?
            .ok_or_else(|| AuthError::not_found(role).into())
    }
}
