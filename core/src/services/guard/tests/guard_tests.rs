//! Unit tests for the access guard

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::principal::{Administrator, Customer, PrincipalSnapshot, Role};
use crate::domain::entities::token::{
    Claims, ADMIN_TOKEN_LIFETIME_SECS, CUSTOMER_TOKEN_LIFETIME_SECS, JWT_AUDIENCE, JWT_ISSUER,
};
use crate::repositories::{
    AccountDirectory, InMemoryAdminRepository, InMemoryCustomerRepository, PrincipalStore,
};
use crate::services::guard::{AccessGuard, Decision, Denial};
use crate::services::token::{TokenService, TokenServiceConfig};

struct Fixture {
    admins: Arc<InMemoryAdminRepository>,
    customers: Arc<InMemoryCustomerRepository>,
    tokens: Arc<TokenService>,
    guard: AccessGuard<InMemoryAdminRepository, InMemoryCustomerRepository>,
    admin: Administrator,
    customer: Customer,
}

impl Fixture {
    async fn new() -> Self {
        let admin = Administrator::new("ops@example.com", "hash").with_authority("owner");
        let customer = Customer::new("jo@example.com", "Jo");

        let admins = Arc::new(InMemoryAdminRepository::with_admin(admin.clone()).await);
        let customers = Arc::new(InMemoryCustomerRepository::with_customer(customer.clone()).await);
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::new("guard-secret")).unwrap());
        let guard = AccessGuard::new(
            Arc::clone(&tokens),
            AccountDirectory::new(Arc::clone(&admins), Arc::clone(&customers)),
        );

        Self {
            admins,
            customers,
            tokens,
            guard,
            admin,
            customer,
        }
    }

    fn admin_token(&self) -> String {
        self.tokens
            .issue(&self.admin.snapshot(), ADMIN_TOKEN_LIFETIME_SECS)
            .unwrap()
    }

    fn customer_token(&self) -> String {
        self.tokens
            .issue(&self.customer.snapshot(), CUSTOMER_TOKEN_LIFETIME_SECS)
            .unwrap()
    }
}

#[tokio::test]
async fn test_allows_current_admin_token() {
    let fx = Fixture::new().await;
    let token = fx.admin_token();

    let decision = fx.guard.authorize(Some(Role::Admin), Some(&token)).await;
    let context = decision.into_result().unwrap();

    assert_eq!(context.principal_id, fx.admin.id);
    assert_eq!(context.role, Role::Admin);
    assert_eq!(context.authority.as_deref(), Some("owner"));
}

#[tokio::test]
async fn test_allows_any_role_when_none_required() {
    let fx = Fixture::new().await;
    let token = fx.customer_token();

    assert!(fx.guard.authorize(None, Some(&token)).await.is_allowed());
}

#[tokio::test]
async fn test_missing_token() {
    let fx = Fixture::new().await;

    assert_eq!(
        fx.guard.authorize(Some(Role::Admin), None).await,
        Decision::Deny(Denial::NoCredential)
    );
    assert_eq!(
        fx.guard.authorize(Some(Role::Admin), Some("   ")).await,
        Decision::Deny(Denial::NoCredential)
    );
}

#[tokio::test]
async fn test_expired_token() {
    let fx = Fixture::new().await;
    let mut claims = Claims::for_principal(&fx.customer.snapshot(), 60, JWT_ISSUER, JWT_AUDIENCE);
    claims.exp = Utc::now().timestamp() - 5;
    let token = fx.tokens.encode_claims(&claims).unwrap();

    assert_eq!(
        fx.guard.authorize(Some(Role::Customer), Some(&token)).await,
        Decision::Deny(Denial::CredentialExpired)
    );
    assert_eq!(fx.customers.freshness_lookups(), 0);
}

#[tokio::test]
async fn test_forged_token_is_verification_failure() {
    let fx = Fixture::new().await;
    let forger = TokenService::new(TokenServiceConfig::new("not-the-secret")).unwrap();
    let token = forger
        .issue(&fx.admin.snapshot(), ADMIN_TOKEN_LIFETIME_SECS)
        .unwrap();

    let decision = fx.guard.authorize(Some(Role::Admin), Some(&token)).await;
    assert_eq!(decision, Decision::Deny(Denial::VerificationFailed));
    assert_eq!(decision.denial().unwrap().status_code(), 500);
}

#[tokio::test]
async fn test_role_mismatch_performs_no_lookup() {
    let fx = Fixture::new().await;
    let customer_token = fx.customer_token();
    let admin_token = fx.admin_token();

    assert_eq!(
        fx.guard.authorize(Some(Role::Admin), Some(&customer_token)).await,
        Decision::Deny(Denial::RoleMismatch {
            required: Role::Admin,
            presented: Role::Customer,
        })
    );
    assert_eq!(
        fx.guard.authorize(Some(Role::Customer), Some(&admin_token)).await,
        Decision::Deny(Denial::RoleMismatch {
            required: Role::Customer,
            presented: Role::Admin,
        })
    );

    assert_eq!(fx.admins.freshness_lookups(), 0);
    assert_eq!(fx.customers.freshness_lookups(), 0);
}

#[tokio::test]
async fn test_role_mismatch_wins_over_missing_principal() {
    let fx = Fixture::new().await;
    let ghost = PrincipalSnapshot::new("ghost", Role::Customer, 0);
    let token = fx.tokens.issue(&ghost, 3600).unwrap();

    assert!(matches!(
        fx.guard.authorize(Some(Role::Admin), Some(&token)).await,
        Decision::Deny(Denial::RoleMismatch { .. })
    ));
}

#[tokio::test]
async fn test_unknown_principal() {
    let fx = Fixture::new().await;
    let ghost = PrincipalSnapshot::new("ghost", Role::Admin, 0);
    let token = fx.tokens.issue(&ghost, 3600).unwrap();

    let decision = fx.guard.authorize(Some(Role::Admin), Some(&token)).await;
    assert_eq!(decision, Decision::Deny(Denial::PrincipalNotFound(Role::Admin)));
    assert_eq!(decision.denial().unwrap().message(), "Admin not found");
}

#[tokio::test]
async fn test_stale_generation_is_obsolete() {
    let fx = Fixture::new().await;
    let token = fx.customer_token();

    fx.customers
        .increment_generation(&fx.customer.id)
        .await
        .unwrap();

    assert_eq!(
        fx.guard.authorize(Some(Role::Customer), Some(&token)).await,
        Decision::Deny(Denial::StaleCredential)
    );
}

#[tokio::test]
async fn test_disabled_principal() {
    let fx = Fixture::new().await;
    let token = fx.admin_token();
    fx.admins.set_active(&fx.admin.id, false).await;

    assert_eq!(
        fx.guard.authorize(Some(Role::Admin), Some(&token)).await,
        Decision::Deny(Denial::PrincipalDisabled)
    );
}

#[tokio::test]
async fn test_stale_is_reported_before_disabled() {
    let fx = Fixture::new().await;
    let token = fx.admin_token();
    fx.admins.increment_generation(&fx.admin.id).await.unwrap();
    fx.admins.set_active(&fx.admin.id, false).await;

    assert_eq!(
        fx.guard.authorize(Some(Role::Admin), Some(&token)).await,
        Decision::Deny(Denial::StaleCredential)
    );
}

#[tokio::test]
async fn test_store_failure_is_internal() {
    let fx = Fixture::new().await;
    let token = fx.customer_token();
    fx.customers.set_unavailable(true);

    let decision = fx.guard.authorize(Some(Role::Customer), Some(&token)).await;
    assert_eq!(decision, Decision::Deny(Denial::Internal));
    assert_eq!(decision.denial().unwrap().status_code(), 500);
}

#[tokio::test]
async fn test_single_lookup_per_authorization() {
    let fx = Fixture::new().await;
    let token = fx.customer_token();

    fx.guard.authorize(Some(Role::Customer), Some(&token)).await;
    assert_eq!(fx.customers.freshness_lookups(), 1);
    assert_eq!(fx.admins.freshness_lookups(), 0);
}
