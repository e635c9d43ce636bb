//! Service Layer
//!
//! Business logic of the authentication core: session tracking and the
//! authentication service itself.

pub mod auth;
pub mod session_store;

// Re-export services
pub use auth::AuthService;
pub use session_store::SessionStore;
