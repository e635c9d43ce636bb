//! Grocery Auth
//!
//! Authentication and input-validation core for a grocery ordering service:
//! credential verification, session management, field validation, and
//! defense-in-depth injection filtering over a PostgreSQL credential store.
//!
//! # Features
//!
//! - **Role-Based Sessions**: administrator and customer sessions tracked in
//!   an in-memory store with a single "current" session for console flows
//! - **Password Security**: salted SHA-256 hashing (`salt:hash`) for
//!   customer credentials, with strength scoring and masking helpers
//! - **Input Validation**: pure validators for every user-supplied field
//! - **Injection Defense**: parameterized queries first, pattern scanning
//!   and sanitization as additional layers
//! - **Fail-Closed Semantics**: malformed input, policy violations, and
//!   store failures all degrade to a safe `false`, with diagnostics logged
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use grocery_auth::{
//!     database::{DatabaseConfig, PgCredentialStore},
//!     service::AuthService,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = DatabaseConfig::from_env()?.create_pool().await?;
//!     let auth = AuthService::new(Arc::new(PgCredentialStore::new(pool)));
//!
//!     if auth.authenticate_customer("alice@example.com", "Sup3r$ecret").await {
//!         println!("Welcome, {}!", auth.current_username().unwrap());
//!     }
//!
//!     auth.logout();
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **Service Layer**: [`AuthService`] orchestration and [`SessionStore`]
//! - **Models**: credential rows and session records
//! - **Database**: connection management and the [`CredentialStore`] seam
//! - **Utils**: validation, security primitives, and error types
//!
//! # Known Weaknesses (deliberate)
//!
//! - Administrator passwords are stored and compared as plaintext, a legacy
//!   requirement preserved until explicitly changed; customer passwords are
//!   salted and hashed.
//! - [`sanitize_input`](utils::validation::sanitize_input) and
//!   [`contains_sql_injection_patterns`](utils::security::contains_sql_injection_patterns)
//!   are substring filters that also mutate or flag benign text; they are
//!   defense-in-depth behind parameterized queries, not precise parsers.

/// Configuration management for authentication settings
pub mod config;

/// Database connection management and the credential store
pub mod database;

/// Data models: credentials and sessions
pub mod models;

/// Business logic: authentication service and session store
pub mod service;

/// Shared utilities for security, validation, and error handling
pub mod utils;

// Re-export commonly used types for convenient access
pub use config::AuthConfig;
pub use database::{CredentialStore, DatabaseConfig, DatabasePool, PgCredentialStore};
pub use models::{AdminCredential, CustomerCredential, UserRole, UserSession};
pub use service::{AuthService, SessionStore};
pub use utils::error::{AuthError, AuthResult};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
