//! Session Models
//!
//! Data structures for authenticated sessions: the role assigned at login
//! and the in-memory session record tracked by the session store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role assigned to a session at creation, fixed for its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    /// Administrator authenticated by username
    Admin,

    /// Customer authenticated by email
    Customer,
}

impl UserRole {
    /// Human-readable role description
    pub fn description(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::Customer => "Customer",
        }
    }
}

/// An active user session
///
/// Created by the authentication service on successful login and tracked
/// by the session store until logout. Timestamps only change through the
/// explicit [`touch`](UserSession::touch) operation so that every mutation
/// point stays auditable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    /// Opaque random token naming this session
    pub token: String,

    /// Subject identifier: admin username or customer email
    pub username: String,

    /// Role fixed at creation
    pub role: UserRole,

    /// 6-digit customer identifier, present only for customer sessions
    pub customer_id: Option<String>,

    /// Customer display name, assigned right after creation when known
    pub customer_name: Option<String>,

    /// Timestamp of successful authentication
    pub login_time: DateTime<Utc>,

    /// Timestamp of the most recent activity refresh
    pub last_activity: DateTime<Utc>,
}

impl UserSession {
    /// Create a session for a freshly authenticated user
    pub fn new(token: String, username: String, role: UserRole, customer_id: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            token,
            username,
            role,
            customer_id,
            customer_name: None,
            login_time: now,
            last_activity: now,
        }
    }

    /// Assign the customer display name (used immediately after creation)
    pub fn set_customer_name(&mut self, name: String) {
        self.customer_name = Some(name);
    }

    /// Refresh the last-activity timestamp
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Whether this is an administrator session
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Whether this is a customer session
    pub fn is_customer(&self) -> bool {
        self.role == UserRole::Customer
    }

    /// Minutes elapsed since login
    pub fn session_duration_minutes(&self) -> i64 {
        (Utc::now() - self.login_time).num_minutes()
    }

    /// Minutes elapsed since the last activity refresh
    pub fn minutes_since_last_activity(&self) -> i64 {
        (Utc::now() - self.last_activity).num_minutes()
    }

    /// Whether the session has been inactive longer than the given timeout
    ///
    /// Expiry is opt-in: the store never enforces it, callers decide.
    pub fn is_expired(&self, timeout_minutes: i64) -> bool {
        self.minutes_since_last_activity() > timeout_minutes
    }

    /// Name to show for this user: customer name when present, else the
    /// subject identifier
    pub fn display_name(&self) -> &str {
        match &self.customer_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

impl fmt::Display for UserSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the full token
        let token_prefix: String = self.token.chars().take(8).collect();
        write!(
            f,
            "UserSession{{token='{}...', username='{}', role={}, customer_id={:?}, login_time={}}}",
            token_prefix,
            self.username,
            self.role.description(),
            self.customer_id,
            self.login_time
        )
    }
}
