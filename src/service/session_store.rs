//! Session Store
//!
//! In-memory tracking of active sessions: a token-to-session map plus the
//! single "current" session driving the interactive console flow. The map
//! and the current pointer share one mutex so they can never disagree when
//! the owning service is shared across threads.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::UserSession;

#[derive(Default)]
struct SessionState {
    active: HashMap<String, UserSession>,
    current_token: Option<String>,
}

/// Tracks active sessions and the current session for this process
///
/// Explicitly constructed and owned by the authentication service; there
/// is no global instance.
#[derive(Default)]
pub struct SessionStore {
    state: Mutex<SessionState>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a session and make it current
    pub fn insert(&self, session: UserSession) {
        let mut state = self.lock();
        state.current_token = Some(session.token.clone());
        state.active.insert(session.token.clone(), session);
    }

    /// Remove a tracked session by token, returning it if present
    ///
    /// Clears the current pointer only when it referenced that token, so
    /// removing someone else's session leaves the current one intact.
    pub fn remove(&self, token: &str) -> Option<UserSession> {
        let mut state = self.lock();
        if state.current_token.as_deref() == Some(token) {
            state.current_token = None;
        }
        state.active.remove(token)
    }

    /// Snapshot of a tracked session by token
    pub fn get(&self, token: &str) -> Option<UserSession> {
        self.lock().active.get(token).cloned()
    }

    /// Whether a token is tracked
    pub fn contains(&self, token: &str) -> bool {
        self.lock().active.contains_key(token)
    }

    /// Snapshot of the current session, if one is set and still tracked
    ///
    /// A session removed out from under the current pointer yields `None`.
    pub fn current(&self) -> Option<UserSession> {
        let state = self.lock();
        let token = state.current_token.as_deref()?;
        state.active.get(token).cloned()
    }

    /// Token of the current session, if any
    pub fn current_token(&self) -> Option<String> {
        self.lock().current_token.clone()
    }

    /// Remove the current session from tracking and clear the pointer
    ///
    /// No-op when already anonymous.
    pub fn remove_current(&self) -> Option<UserSession> {
        let mut state = self.lock();
        let token = state.current_token.take()?;
        state.active.remove(&token)
    }

    /// Refresh the last-activity timestamp of the current session
    pub fn touch_current(&self) {
        let mut state = self.lock();
        if let Some(token) = state.current_token.clone() {
            if let Some(session) = state.active.get_mut(&token) {
                session.touch();
            }
        }
    }

    /// Drop every tracked session and the current pointer
    pub fn clear(&self) {
        let mut state = self.lock();
        state.active.clear();
        state.current_token = None;
    }

    /// Number of tracked sessions
    pub fn len(&self) -> usize {
        self.lock().active.len()
    }

    /// Whether no sessions are tracked
    pub fn is_empty(&self) -> bool {
        self.lock().active.is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        // A poisoned mutex means a panic mid-mutation; session state is
        // reconstructible, so recover rather than cascade
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn session(token: &str) -> UserSession {
        UserSession::new(
            token.to_string(),
            "alice@example.com".to_string(),
            UserRole::Customer,
            Some("123456".to_string()),
        )
    }

    #[test]
    fn test_insert_makes_session_current() {
        let store = SessionStore::new();
        store.insert(session("tok-a"));

        assert_eq!(store.len(), 1);
        assert!(store.contains("tok-a"));
        assert_eq!(store.current().unwrap().token, "tok-a");
    }

    #[test]
    fn test_second_insert_replaces_current_but_keeps_both() {
        let store = SessionStore::new();
        store.insert(session("tok-a"));
        store.insert(session("tok-b"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.current().unwrap().token, "tok-b");
    }

    #[test]
    fn test_remove_other_session_keeps_current() {
        let store = SessionStore::new();
        store.insert(session("tok-a"));
        store.insert(session("tok-b"));

        let removed = store.remove("tok-a");
        assert_eq!(removed.unwrap().token, "tok-a");
        assert_eq!(store.current().unwrap().token, "tok-b");
    }

    #[test]
    fn test_remove_current_session_clears_pointer() {
        let store = SessionStore::new();
        store.insert(session("tok-a"));

        store.remove("tok-a");
        assert!(store.current().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_current_defends_against_removed_session() {
        let store = SessionStore::new();
        store.insert(session("tok-a"));

        // Remove behind the pointer's back via the map only
        store.lock().active.remove("tok-a");

        assert!(store.current().is_none());
        assert_eq!(store.current_token().as_deref(), Some("tok-a"));
    }

    #[test]
    fn test_remove_current_is_noop_when_anonymous() {
        let store = SessionStore::new();
        assert!(store.remove_current().is_none());
    }

    #[test]
    fn test_touch_current_updates_last_activity() {
        let store = SessionStore::new();
        store.insert(session("tok-a"));
        let before = store.current().unwrap().last_activity;

        std::thread::sleep(std::time::Duration::from_millis(5));
        store.touch_current();

        assert!(store.current().unwrap().last_activity > before);
    }

    #[test]
    fn test_clear_drops_everything() {
        let store = SessionStore::new();
        store.insert(session("tok-a"));
        store.insert(session("tok-b"));

        store.clear();

        assert!(store.is_empty());
        assert!(store.current().is_none());
        assert!(store.current_token().is_none());
    }
}
