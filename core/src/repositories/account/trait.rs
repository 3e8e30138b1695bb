//! Account store traits used by session issuance and the access guard.
//!
//! Every principal record carries a generation counter. A token embeds the
//! generation current at issuance; a later login increments the counter and
//! thereby invalidates every earlier token for that principal.

use async_trait::async_trait;

use crate::domain::entities::principal::{Administrator, Customer, Freshness};
use crate::errors::DomainError;

/// Role-agnostic access to the freshness data of one kind of principal
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use sg_core::domain::entities::principal::Freshness;
/// use sg_core::errors::DomainError;
/// use sg_core::repositories::PrincipalStore;
///
/// struct StaticStore;
///
/// #[async_trait]
/// impl PrincipalStore for StaticStore {
///     async fn find_freshness(&self, _id: &str) -> Result<Option<Freshness>, DomainError> {
///         Ok(Some(Freshness { generation: 0, active: true }))
///     }
///
///     async fn increment_generation(&self, _id: &str) -> Result<Option<u64>, DomainError> {
///         Ok(Some(1))
///     }
/// }
/// ```
#[async_trait]
pub trait PrincipalStore: Send + Sync {
    /// Fetch only the generation and active flag of a principal
    ///
    /// # Returns
    /// * `Ok(Some(Freshness))` - Principal exists
    /// * `Ok(None)` - No principal with this ID
    /// * `Err(DomainError)` - Store unreachable or corrupted row
    async fn find_freshness(&self, id: &str) -> Result<Option<Freshness>, DomainError>;

    /// Atomically increment the generation and return the new value
    ///
    /// Two concurrent calls for the same principal must observe distinct
    /// results. Returns `Ok(None)` when the principal does not exist.
    async fn increment_generation(&self, id: &str) -> Result<Option<u64>, DomainError>;
}

/// Administrator account store
#[async_trait]
pub trait AdminRepository: PrincipalStore {
    /// Find an administrator by normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<Administrator>, DomainError>;
}

/// Customer account store
#[async_trait]
pub trait CustomerRepository: PrincipalStore {
    /// Find a customer by normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError>;

    /// Persist a new customer
    ///
    /// # Errors
    /// * `AuthError::DuplicateEmail` - A customer with this email already exists
    async fn create(&self, customer: Customer) -> Result<Customer, DomainError>;
}
