//! Per-request authorization of session tokens

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::entities::principal::Role;
use crate::errors::TokenError;
use crate::repositories::{AccountDirectory, AdminRepository, CustomerRepository};
use crate::services::token::TokenService;

use super::decision::{AuthContext, Decision, Denial};

/// Decides whether a presented token grants access
///
/// Checks run in a fixed order and stop at the first failure:
/// presence, signature and expiry, role, then a single freshness lookup
/// in the store for the token's role (existence, generation, active flag).
pub struct AccessGuard<A, C> {
    token_service: Arc<TokenService>,
    directory: AccountDirectory<A, C>,
}

impl<A, C> AccessGuard<A, C>
where
    A: AdminRepository,
    C: CustomerRepository,
{
    pub fn new(token_service: Arc<TokenService>, directory: AccountDirectory<A, C>) -> Self {
        Self {
            token_service,
            directory,
        }
    }

    /// Authorizes a request
    ///
    /// # Arguments
    ///
    /// * `required_role` - Role the endpoint demands, or `None` for any role
    /// * `presented` - Raw token from the request, if any
    ///
    /// # Returns
    ///
    /// `Decision::Allow` with the authenticated context, or the first
    /// `Denial` encountered. A role mismatch is detected before any store
    /// lookup.
    pub async fn authorize(&self, required_role: Option<Role>, presented: Option<&str>) -> Decision {
        let token = match presented.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => token,
            None => return Decision::Deny(Denial::NoCredential),
        };

        let claims = match self.token_service.verify(token) {
            Ok(claims) => claims,
            Err(TokenError::TokenExpired) => return Decision::Deny(Denial::CredentialExpired),
            Err(e) => {
                warn!(error = %e, "Session token failed verification");
                return Decision::Deny(Denial::VerificationFailed);
            }
        };

        if let Some(required) = required_role {
            if claims.role != required {
                debug!(
                    principal_id = %claims.sub,
                    presented = %claims.role,
                    required = %required,
                    "Role mismatch"
                );
                return Decision::Deny(Denial::RoleMismatch {
                    required,
                    presented: claims.role,
                });
            }
        }

        let store = self.directory.store_for(claims.role);
        let freshness = match store.find_freshness(&claims.sub).await {
            Ok(Some(freshness)) => freshness,
            Ok(None) => return Decision::Deny(Denial::PrincipalNotFound(claims.role)),
            Err(e) => {
                error!(error = %e, role = %claims.role, "Freshness lookup failed");
                return Decision::Deny(Denial::Internal);
            }
        };

        if freshness.generation != claims.generation {
            debug!(
                principal_id = %claims.sub,
                token_generation = claims.generation,
                current_generation = freshness.generation,
                "Obsolete session token"
            );
            return Decision::Deny(Denial::StaleCredential);
        }

        if !freshness.active {
            return Decision::Deny(Denial::PrincipalDisabled);
        }

        Decision::Allow(AuthContext::from(claims))
    }
}
