//! Account repository module.

mod r#trait;
pub use r#trait::{AdminRepository, CustomerRepository, PrincipalStore};

mod directory;
pub use directory::AccountDirectory;

mod memory;
pub use memory::{InMemoryAdminRepository, InMemoryCustomerRepository};

#[cfg(test)]
mod tests;
