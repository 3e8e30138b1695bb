//! Administrator password login tests

use crate::domain::entities::principal::{Administrator, Role};
use crate::domain::entities::token::ADMIN_TOKEN_LIFETIME_SECS;
use crate::errors::{AuthError, DomainError};
use crate::repositories::PrincipalStore;
use crate::services::guard::{Decision, Denial};

use super::mocks::{Harness, ADMIN_PASSWORD};

#[tokio::test]
async fn test_admin_login_issues_token_with_incremented_generation() {
    let harness = Harness::new();
    let admin = harness.seed_admin("ops@example.com").await;

    let session = harness
        .sessions
        .admin_login("ops@example.com", ADMIN_PASSWORD)
        .await
        .unwrap();

    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.principal_id, admin.id);
    assert_eq!(session.generation, 1);
    assert_eq!(session.expires_in, ADMIN_TOKEN_LIFETIME_SECS);
    assert!(!session.created);
    assert_eq!(harness.admins.get(&admin.id).await.unwrap().generation, 1);

    let context = harness
        .guard
        .authorize(Some(Role::Admin), Some(&session.token))
        .await
        .into_result()
        .unwrap();
    assert_eq!(context.generation, 1);
}

#[tokio::test]
async fn test_admin_login_carries_authority() {
    let harness = Harness::new();
    let admin = Administrator::new("root@example.com", format!("plain:{}", ADMIN_PASSWORD))
        .with_authority("superadmin");
    harness.admins.insert(admin).await;

    let session = harness
        .sessions
        .admin_login("root@example.com", ADMIN_PASSWORD)
        .await
        .unwrap();
    assert_eq!(session.authority.as_deref(), Some("superadmin"));

    let claims = harness.tokens.verify(&session.token).unwrap();
    assert_eq!(claims.authority.as_deref(), Some("superadmin"));
}

#[tokio::test]
async fn test_admin_login_normalizes_email() {
    let harness = Harness::new();
    harness.seed_admin("ops@example.com").await;

    let result = harness
        .sessions
        .admin_login("  OPS@Example.com ", ADMIN_PASSWORD)
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_admin_login_missing_fields() {
    let harness = Harness::new();

    let result = harness.sessions.admin_login("  ", ADMIN_PASSWORD).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::MissingField { ref field })) if field == "email"
    ));

    let result = harness.sessions.admin_login("ops@example.com", "").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::MissingField { ref field })) if field == "password"
    ));
}

#[tokio::test]
async fn test_admin_login_unknown_email() {
    let harness = Harness::new();

    let result = harness
        .sessions
        .admin_login("nobody@example.com", ADMIN_PASSWORD)
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::PrincipalNotFound { role: Role::Admin }))
    ));
}

#[tokio::test]
async fn test_admin_login_disabled_account_does_not_write() {
    let harness = Harness::new();
    let admin = harness.seed_admin("ops@example.com").await;
    harness.admins.set_active(&admin.id, false).await;

    let result = harness
        .sessions
        .admin_login("ops@example.com", ADMIN_PASSWORD)
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AccountDisabled))
    ));
    assert_eq!(harness.admins.get(&admin.id).await.unwrap().generation, 0);
}

#[tokio::test]
async fn test_admin_login_wrong_password_does_not_write() {
    let harness = Harness::new();
    let admin = harness.seed_admin("ops@example.com").await;

    let result = harness
        .sessions
        .admin_login("ops@example.com", "wrong password")
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert_eq!(harness.admins.get(&admin.id).await.unwrap().generation, 0);
}

#[tokio::test]
async fn test_admin_login_unusable_hash_is_internal() {
    let harness = Harness::new();
    let mut admin = harness.seed_admin("ops@example.com").await;
    admin.password_hash = "$2b$garbage".to_string();
    harness.admins.insert(admin).await;

    let result = harness
        .sessions
        .admin_login("ops@example.com", ADMIN_PASSWORD)
        .await;
    assert!(matches!(result, Err(DomainError::Internal { .. })));
}

#[tokio::test]
async fn test_second_admin_login_makes_first_token_obsolete() {
    let harness = Harness::new();
    harness.seed_admin("ops@example.com").await;

    let first = harness
        .sessions
        .admin_login("ops@example.com", ADMIN_PASSWORD)
        .await
        .unwrap();
    let second = harness
        .sessions
        .admin_login("ops@example.com", ADMIN_PASSWORD)
        .await
        .unwrap();

    assert_eq!(second.generation, first.generation + 1);
    assert_eq!(
        harness.guard.authorize(Some(Role::Admin), Some(&first.token)).await,
        Decision::Deny(Denial::StaleCredential)
    );
    assert!(harness
        .guard
        .authorize(Some(Role::Admin), Some(&second.token))
        .await
        .is_allowed());
}

#[tokio::test]
async fn test_admin_login_store_failure() {
    let harness = Harness::new();
    let admin = harness.seed_admin("ops@example.com").await;
    harness.admins.set_unavailable(true);

    let result = harness
        .sessions
        .admin_login("ops@example.com", ADMIN_PASSWORD)
        .await;
    assert!(matches!(result, Err(DomainError::Internal { .. })));

    harness.admins.set_unavailable(false);
    let freshness = harness.admins.find_freshness(&admin.id).await.unwrap().unwrap();
    assert_eq!(freshness.generation, 0);
}
