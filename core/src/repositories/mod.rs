pub mod account;

pub use account::{
    AccountDirectory, AdminRepository, CustomerRepository, InMemoryAdminRepository,
    InMemoryCustomerRepository, PrincipalStore,
};
