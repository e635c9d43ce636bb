//! Authentication Service
//!
//! Orchestrates input validation, the security primitives, the session
//! store, and the credential store to authenticate administrators and
//! customers and expose role-checked accessors.
//!
//! Every operation here fails closed: malformed input, detected injection
//! patterns, and credential-store failures all surface as the same `false`
//! a wrong password would produce. The distinction is deliberately hidden
//! from callers to avoid leaking why an attempt failed; operators get the
//! detail through the log instead.

use std::sync::Arc;

use crate::database::CredentialStore;
use crate::models::{UserRole, UserSession};
use crate::utils::security::{
    contains_sql_injection_patterns, generate_session_token, is_valid_session_token,
    verify_password,
};
use crate::utils::validation::{is_valid_email, normalize_email, sanitize_input};

use super::session_store::SessionStore;

/// Authentication and session management for the grocery ordering service
///
/// Explicitly constructed and dependency-injected by the process entry
/// point; its lifetime is the process lifetime. There is no global
/// instance.
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    sessions: SessionStore,
}

impl AuthService {
    /// Create a service over the given credential store
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            sessions: SessionStore::new(),
        }
    }

    /// Authenticate an administrator by username and password
    ///
    /// The lookup uses the sanitized username, but the credential match is
    /// exact string equality of the raw fields, so padded input never
    /// authenticates. The stored admin password is plaintext and compared
    /// directly, a known legacy weakness preserved on purpose (the customer
    /// path hashes; aligning the admin path is a separate decision).
    pub async fn authenticate_admin(&self, username: &str, password: &str) -> bool {
        if username.trim().is_empty() || password.trim().is_empty() {
            return false;
        }

        if contains_sql_injection_patterns(username) || contains_sql_injection_patterns(password)
        {
            log::warn!("Security alert: potential SQL injection attempt in admin login");
            return false;
        }

        let sanitized_username = sanitize_input(username);

        match self.store.find_admin(&sanitized_username).await {
            Ok(Some(admin)) => {
                if admin.username == username && admin.password == password {
                    let token = generate_session_token();
                    let session =
                        UserSession::new(token, admin.username, UserRole::Admin, None);
                    log::info!("Administrator '{}' authenticated", session.username);
                    self.sessions.insert(session);
                    true
                } else {
                    false
                }
            }
            Ok(None) => false,
            Err(e) => {
                log::error!("Credential store error during admin authentication: {e}");
                false
            }
        }
    }

    /// Authenticate a customer by email and password
    ///
    /// The email is validated, normalized (trimmed and lowercased), and
    /// sanitized before the lookup; the password is verified against the
    /// stored `salt:hash` value.
    pub async fn authenticate_customer(&self, email: &str, password: &str) -> bool {
        if email.trim().is_empty() || password.trim().is_empty() {
            return false;
        }

        if !is_valid_email(email) {
            return false;
        }

        if contains_sql_injection_patterns(email) || contains_sql_injection_patterns(password) {
            log::warn!("Security alert: potential SQL injection attempt in customer login");
            return false;
        }

        let lookup_email = sanitize_input(&normalize_email(email));

        match self.store.find_customer_by_email(&lookup_email).await {
            Ok(Some(customer)) => {
                if verify_password(password, &customer.password) {
                    let token = generate_session_token();
                    let mut session = UserSession::new(
                        token,
                        customer.email,
                        UserRole::Customer,
                        Some(customer.customer_id),
                    );
                    session.set_customer_name(customer.full_name);
                    log::info!("Customer '{}' authenticated", session.username);
                    self.sessions.insert(session);
                    true
                } else {
                    false
                }
            }
            Ok(None) => false,
            Err(e) => {
                log::error!("Credential store error during customer authentication: {e}");
                false
            }
        }
    }

    /// Whether a current session exists and is still tracked and well-formed
    pub fn is_authenticated(&self) -> bool {
        match self.sessions.current() {
            Some(session) => is_valid_session_token(&session.token),
            None => false,
        }
    }

    /// Whether the current session is an administrator session
    pub fn is_admin(&self) -> bool {
        self.is_authenticated()
            && self
                .sessions
                .current()
                .is_some_and(|session| session.is_admin())
    }

    /// Whether the current session is a customer session
    pub fn is_customer(&self) -> bool {
        self.is_authenticated()
            && self
                .sessions
                .current()
                .is_some_and(|session| session.is_customer())
    }

    /// Snapshot of the current session, `None` when not authenticated
    pub fn current_session(&self) -> Option<UserSession> {
        if self.is_authenticated() {
            self.sessions.current()
        } else {
            None
        }
    }

    /// Customer identifier of the current session, `None` unless a
    /// customer is authenticated
    pub fn current_customer_id(&self) -> Option<String> {
        if self.is_customer() {
            self.sessions.current().and_then(|s| s.customer_id)
        } else {
            None
        }
    }

    /// Username or email of the current session, `None` when anonymous
    pub fn current_username(&self) -> Option<String> {
        if self.is_authenticated() {
            self.sessions.current().map(|s| s.username)
        } else {
            None
        }
    }

    /// Refresh the last-activity timestamp of the current session
    pub fn refresh_activity(&self) {
        self.sessions.touch_current();
    }

    /// Log out the current user; no-op when anonymous
    pub fn logout(&self) {
        if let Some(session) = self.sessions.remove_current() {
            log::info!("'{}' logged out", session.username);
        }
    }

    /// Invalidate an arbitrary tracked session by token
    ///
    /// Also clears the current pointer when it referenced that token, so an
    /// administrator can terminate a session that is not the current one.
    pub fn force_logout(&self, token: &str) {
        if let Some(session) = self.sessions.remove(token) {
            log::info!("Session for '{}' forcibly terminated", session.username);
        }
    }

    /// Check whether a customer email is already registered
    ///
    /// Malformed email ⇒ `false` (not an error); store failures also yield
    /// `false` so that existence information never leaks through errors.
    pub async fn email_exists(&self, email: &str) -> bool {
        if !is_valid_email(email) {
            return false;
        }

        match self.store.email_exists(&normalize_email(email)).await {
            Ok(exists) => exists,
            Err(e) => {
                log::error!("Credential store error checking email existence: {e}");
                false
            }
        }
    }

    /// Pre-flight, side-effect-free login check
    ///
    /// Returns `None` when nothing objectionable is found, otherwise a
    /// human-readable reason suitable for prompting the user before the
    /// real authentication call.
    pub fn validate_login_attempt(
        &self,
        username: &str,
        password: &str,
        expected_role: UserRole,
    ) -> Option<String> {
        if username.trim().is_empty() {
            return Some("Username/Email cannot be empty.".to_string());
        }

        if password.trim().is_empty() {
            return Some("Password cannot be empty.".to_string());
        }

        if contains_sql_injection_patterns(username) || contains_sql_injection_patterns(password)
        {
            return Some("Invalid characters detected in input.".to_string());
        }

        if expected_role == UserRole::Customer && !is_valid_email(username) {
            return Some("Please enter a valid email address.".to_string());
        }

        None
    }

    /// Number of tracked sessions, current or not
    pub fn active_session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Drop every tracked session (application shutdown path)
    pub fn clear_all_sessions(&self) {
        self.sessions.clear();
        log::info!("All sessions cleared");
    }
}
