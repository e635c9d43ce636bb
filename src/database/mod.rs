//! Database Module
//!
//! Connection management and the credential-store seam consumed by the
//! authentication service.

pub mod connection;
pub mod store;

// Re-export commonly used types
pub use connection::{DatabaseConfig, DatabasePool};
pub use store::{CredentialStore, PgCredentialStore};
