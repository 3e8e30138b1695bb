//! Shared fixtures for the HTTP tests
//!
//! Wires the real session service and access guard against in-memory
//! account stores, the in-memory passcode store and the mock email channel.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use sg_api::middleware::auth::SessionGuard;
use sg_api::routes::AppState;
use sg_core::domain::entities::principal::{Administrator, Customer};
use sg_core::repositories::{AccountDirectory, InMemoryAdminRepository, InMemoryCustomerRepository};
use sg_core::services::guard::AccessGuard;
use sg_core::services::session::{InMemoryOtpStore, SessionService, SessionServiceConfig};
use sg_core::services::token::{TokenService, TokenServiceConfig};
use sg_infra::notification::MockEmailChannel;
use sg_infra::security::{hash_password, BcryptPasswordVerifier};
use sg_shared::config::{CorsConfig, Environment, SessionCookieConfig};

pub const JWT_SECRET: &str = "api-test-secret";
pub const ADMIN_EMAIL: &str = "ops@storegate.example";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

pub type TestState = AppState<
    InMemoryAdminRepository,
    InMemoryCustomerRepository,
    BcryptPasswordVerifier,
    InMemoryOtpStore,
    MockEmailChannel,
>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub admins: Arc<InMemoryAdminRepository>,
    pub customers: Arc<InMemoryCustomerRepository>,
    pub otp_store: Arc<InMemoryOtpStore>,
    pub mailer: MockEmailChannel,
    pub tokens: Arc<TokenService>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_environment(Environment::Development)
    }

    pub fn with_environment(environment: Environment) -> Self {
        let admins = Arc::new(InMemoryAdminRepository::new());
        let customers = Arc::new(InMemoryCustomerRepository::new());
        let otp_store = Arc::new(InMemoryOtpStore::new());
        let mailer = MockEmailChannel::new();
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::new(JWT_SECRET)).unwrap());
        let directory = AccountDirectory::new(Arc::clone(&admins), Arc::clone(&customers));

        let session_service = Arc::new(SessionService::new(
            directory.clone(),
            Arc::clone(&tokens),
            Arc::new(BcryptPasswordVerifier::new()),
            Arc::clone(&otp_store),
            Arc::new(mailer.clone()),
            SessionServiceConfig::default(),
        ));
        let guard: Arc<dyn SessionGuard> = Arc::new(AccessGuard::new(Arc::clone(&tokens), directory));

        let state = web::Data::new(AppState {
            session_service,
            guard,
            cookie: SessionCookieConfig {
                secure: environment.is_production(),
                ..Default::default()
            },
            cors: CorsConfig::default(),
            environment,
        });

        Self {
            state,
            admins,
            customers,
            otp_store,
            mailer,
            tokens,
        }
    }

    pub async fn seed_admin(&self) -> Administrator {
        let admin = Administrator::new(ADMIN_EMAIL, hash_password(ADMIN_PASSWORD, 4).unwrap())
            .with_authority("superadmin");
        self.admins.insert(admin.clone()).await;
        admin
    }

    pub async fn seed_customer(&self, email: &str) -> Customer {
        let customer = Customer::new(email, "Jo Shopper");
        self.customers.insert(customer.clone()).await;
        customer
    }
}
