//! Error Handling Utilities
//!
//! Error types shared across the authentication core.

use thiserror::Error;

/// Main error type for authentication core operations
///
/// Authentication entry points (`authenticate_admin`, `authenticate_customer`,
/// `email_exists`) never surface these to callers; they catch them at the
/// service boundary, log a diagnostic, and degrade to a fail-closed `false`.
/// The type exists for the layers underneath, chiefly the credential store.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Database-related errors from the credential store
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Detected injection patterns or other security-policy violations
    #[error("Security policy violation: {0}")]
    SecurityViolation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for operations that can return AuthError
pub type AuthResult<T> = Result<T, AuthError>;
