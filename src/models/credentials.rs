//! Credential Models
//!
//! Row types for the credential relations consulted during authentication.
//! These carry secrets and are never exposed outside the core; the public
//! surface deals in sessions only.

/// Administrator credential row (`admin` relation)
///
/// The `password` column holds plaintext compared byte-for-byte at login.
/// That is a documented legacy weakness carried over deliberately; closing
/// it (hashing like the customer path) is a separate, explicit change.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminCredential {
    /// Unique administrator username
    pub username: String,

    /// Stored plaintext password (legacy requirement)
    pub password: String,
}

/// Customer credential row (`customers` relation)
///
/// `password` holds a `salt:hash` string produced by
/// [`hash_password_with_salt`](crate::utils::security::hash_password_with_salt).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CustomerCredential {
    /// Unique 6-digit customer identifier
    pub customer_id: String,

    /// Customer display name
    pub full_name: String,

    /// Unique, normalized (lowercase) email address
    pub email: String,

    /// Salted password hash in `salt:hash` form
    pub password: String,
}
