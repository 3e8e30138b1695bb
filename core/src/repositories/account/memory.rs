//! In-memory account stores for development and testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::principal::{Administrator, Customer, Freshness};
use crate::errors::{AuthError, DomainError};

use super::r#trait::{AdminRepository, CustomerRepository, PrincipalStore};

/// Counters and failure switch shared by both in-memory stores
#[derive(Default)]
struct StoreCounters {
    freshness_lookups: AtomicUsize,
    unavailable: AtomicBool,
}

impl StoreCounters {
    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::internal("account store unavailable"));
        }
        Ok(())
    }
}

/// In-memory administrator store
pub struct InMemoryAdminRepository {
    admins: Arc<RwLock<HashMap<String, Administrator>>>,
    counters: StoreCounters,
}

impl InMemoryAdminRepository {
    pub fn new() -> Self {
        Self {
            admins: Arc::new(RwLock::new(HashMap::new())),
            counters: StoreCounters::default(),
        }
    }

    /// Create a store seeded with one administrator
    pub async fn with_admin(admin: Administrator) -> Self {
        let repo = Self::new();
        repo.insert(admin).await;
        repo
    }

    pub async fn insert(&self, admin: Administrator) {
        self.admins.write().await.insert(admin.id.clone(), admin);
    }

    pub async fn get(&self, id: &str) -> Option<Administrator> {
        self.admins.read().await.get(id).cloned()
    }

    /// Enable or disable an administrator; returns false if unknown
    pub async fn set_active(&self, id: &str, active: bool) -> bool {
        match self.admins.write().await.get_mut(id) {
            Some(admin) => {
                admin.active = active;
                true
            }
            None => false,
        }
    }

    /// Number of freshness lookups served so far
    pub fn freshness_lookups(&self) -> usize {
        self.counters.freshness_lookups.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail as if the store were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.counters.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

impl Default for InMemoryAdminRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrincipalStore for InMemoryAdminRepository {
    async fn find_freshness(&self, id: &str) -> Result<Option<Freshness>, DomainError> {
        self.counters.freshness_lookups.fetch_add(1, Ordering::SeqCst);
        self.counters.check_available()?;
        Ok(self.admins.read().await.get(id).map(Administrator::freshness))
    }

    async fn increment_generation(&self, id: &str) -> Result<Option<u64>, DomainError> {
        self.counters.check_available()?;
        let mut admins = self.admins.write().await;
        Ok(admins.get_mut(id).map(|admin| {
            admin.generation += 1;
            admin.generation
        }))
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Administrator>, DomainError> {
        self.counters.check_available()?;
        let admins = self.admins.read().await;
        Ok(admins.values().find(|a| a.email == email).cloned())
    }
}

/// In-memory customer store
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<String, Customer>>>,
    counters: StoreCounters,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(HashMap::new())),
            counters: StoreCounters::default(),
        }
    }

    /// Create a store seeded with one customer
    pub async fn with_customer(customer: Customer) -> Self {
        let repo = Self::new();
        repo.insert(customer).await;
        repo
    }

    pub async fn insert(&self, customer: Customer) {
        self.customers
            .write()
            .await
            .insert(customer.id.clone(), customer);
    }

    pub async fn get(&self, id: &str) -> Option<Customer> {
        self.customers.read().await.get(id).cloned()
    }

    /// Enable or disable a customer; returns false if unknown
    pub async fn set_active(&self, id: &str, active: bool) -> bool {
        match self.customers.write().await.get_mut(id) {
            Some(customer) => {
                customer.active = active;
                true
            }
            None => false,
        }
    }

    pub async fn count(&self) -> usize {
        self.customers.read().await.len()
    }

    /// Number of freshness lookups served so far
    pub fn freshness_lookups(&self) -> usize {
        self.counters.freshness_lookups.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail as if the store were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.counters.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrincipalStore for InMemoryCustomerRepository {
    async fn find_freshness(&self, id: &str) -> Result<Option<Freshness>, DomainError> {
        self.counters.freshness_lookups.fetch_add(1, Ordering::SeqCst);
        self.counters.check_available()?;
        Ok(self.customers.read().await.get(id).map(Customer::freshness))
    }

    async fn increment_generation(&self, id: &str) -> Result<Option<u64>, DomainError> {
        self.counters.check_available()?;
        let mut customers = self.customers.write().await;
        Ok(customers.get_mut(id).map(|customer| {
            customer.generation += 1;
            customer.generation
        }))
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        self.counters.check_available()?;
        let customers = self.customers.read().await;
        Ok(customers.values().find(|c| c.email == email).cloned())
    }

    async fn create(&self, customer: Customer) -> Result<Customer, DomainError> {
        self.counters.check_available()?;
        let mut customers = self.customers.write().await;

        if customers.values().any(|c| c.email == customer.email) {
            return Err(AuthError::DuplicateEmail.into());
        }

        customers.insert(customer.id.clone(), customer.clone());
        Ok(customer)
    }
}
