//! Role-indexed view over the administrator and customer stores.

use std::sync::Arc;

use crate::domain::entities::principal::Role;

use super::r#trait::{AdminRepository, CustomerRepository, PrincipalStore};

/// Resolves the store for a role
///
/// The set of roles is closed, so dispatch is an exhaustive match rather
/// than a registry keyed by role name.
pub struct AccountDirectory<A, C> {
    admins: Arc<A>,
    customers: Arc<C>,
}

impl<A, C> AccountDirectory<A, C>
where
    A: AdminRepository,
    C: CustomerRepository,
{
    pub fn new(admins: Arc<A>, customers: Arc<C>) -> Self {
        Self { admins, customers }
    }

    /// Store holding principals of `role`
    pub fn store_for(&self, role: Role) -> &dyn PrincipalStore {
        match role {
            Role::Admin => self.admins.as_ref(),
            Role::Customer => self.customers.as_ref(),
        }
    }

    pub fn admins(&self) -> &A {
        &self.admins
    }

    pub fn customers(&self) -> &C {
        &self.customers
    }
}

impl<A, C> Clone for AccountDirectory<A, C> {
    fn clone(&self) -> Self {
        Self {
            admins: Arc::clone(&self.admins),
            customers: Arc::clone(&self.customers),
        }
    }
}
