//! Data Models Module
//!
//! Data structures used throughout the authentication core: credential
//! rows read from the data store and in-memory session records.

pub mod credentials;
pub mod session;

// Re-export commonly used types
pub use credentials::{AdminCredential, CustomerCredential};
pub use session::{UserRole, UserSession};
