//! Credential Store
//!
//! The data-store seam consumed by the authentication service. Every query
//! binds its parameters positionally and never interpolates user input into
//! SQL text; that is the primary injection defense, with the pattern
//! scanning and sanitization in `utils` layered on top.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{AdminCredential, CustomerCredential};
use crate::utils::error::AuthResult;

/// Read access to the credential relations
///
/// Implemented against PostgreSQL in production and in memory for tests.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up an administrator credential by exact username
    async fn find_admin(&self, username: &str) -> AuthResult<Option<AdminCredential>>;

    /// Look up a customer credential by exact (normalized) email
    async fn find_customer_by_email(&self, email: &str)
        -> AuthResult<Option<CustomerCredential>>;

    /// Check whether a customer with the given (normalized) email exists
    async fn email_exists(&self, email: &str) -> AuthResult<bool>;
}

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    /// Create a store over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_admin(&self, username: &str) -> AuthResult<Option<AdminCredential>> {
        let admin = sqlx::query_as::<_, AdminCredential>(
            "SELECT username, password FROM admin WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    async fn find_customer_by_email(
        &self,
        email: &str,
    ) -> AuthResult<Option<CustomerCredential>> {
        let customer = sqlx::query_as::<_, CustomerCredential>(
            "SELECT customer_id, full_name, email, password FROM customers WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn email_exists(&self, email: &str) -> AuthResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM customers WHERE email = $1")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }
}
