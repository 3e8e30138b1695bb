//! Unit tests for role-indexed store resolution

use std::sync::Arc;

use crate::domain::entities::principal::{Administrator, Customer, Role};
use crate::repositories::account::{
    AccountDirectory, InMemoryAdminRepository, InMemoryCustomerRepository,
};

#[tokio::test]
async fn test_store_for_routes_by_role() {
    let admin = Administrator::new("ops@example.com", "hash");
    let customer = Customer::new("jo@example.com", "Jo");
    let (admin_id, customer_id) = (admin.id.clone(), customer.id.clone());

    let directory = AccountDirectory::new(
        Arc::new(InMemoryAdminRepository::with_admin(admin).await),
        Arc::new(InMemoryCustomerRepository::with_customer(customer).await),
    );

    let admin_store = directory.store_for(Role::Admin);
    assert!(admin_store.find_freshness(&admin_id).await.unwrap().is_some());
    assert!(admin_store.find_freshness(&customer_id).await.unwrap().is_none());

    let customer_store = directory.store_for(Role::Customer);
    assert!(customer_store.find_freshness(&customer_id).await.unwrap().is_some());

    assert_eq!(directory.admins().freshness_lookups(), 2);
    assert_eq!(directory.customers().freshness_lookups(), 1);
}
