//! Utilities Module
//!
//! Shared utilities for error handling, security primitives, and input
//! validation used throughout the authentication core.

pub mod error;
pub mod security;
pub mod validation;

// Re-export commonly used utilities
pub use error::{AuthError, AuthResult};
pub use security::*;
pub use validation::*;
