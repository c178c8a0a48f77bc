//! Injected session context
//!
//! The bearer credential and the logout trigger are passed in explicitly
//! rather than read from ambient global state, so tests can substitute them.

use std::sync::Mutex;

/// Session context supplying the bearer credential and the logout trigger
#[cfg_attr(test, mockall::automock)]
pub trait Session: Send + Sync {
    /// The bearer token to attach to outgoing requests, if a user is
    /// signed in.
    fn access_token(&self) -> Option<String>;

    /// Terminate the session. Called exactly once per 401; the request
    /// that triggered it still fails with [`crate::ApiError::Auth`].
    fn terminate(&self);
}

/// In-memory session backed by a mutex-guarded token slot
#[derive(Debug, Default)]
pub struct MemorySession {
    inner: Mutex<MemorySessionState>,
}

#[derive(Debug, Default)]
struct MemorySessionState {
    token: Option<String>,
    terminated: bool,
}

impl MemorySession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(MemorySessionState {
                token: Some(token.into()),
                terminated: false,
            }),
        }
    }

    /// Anonymous session with no credential
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_terminated(&self) -> bool {
        self.inner.lock().expect("session lock poisoned").terminated
    }
}

impl Session for MemorySession {
    fn access_token(&self) -> Option<String> {
        self.inner.lock().expect("session lock poisoned").token.clone()
    }

    fn terminate(&self) {
        let mut state = self.inner.lock().expect("session lock poisoned");
        state.token = None;
        state.terminated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_token() {
        let session = MemorySession::new("tok-123");
        assert_eq!(session.access_token(), Some("tok-123".to_string()));
        assert!(!session.is_terminated());
    }

    #[test]
    fn anonymous_session_has_no_token() {
        let session = MemorySession::anonymous();
        assert_eq!(session.access_token(), None);
    }

    #[test]
    fn terminate_clears_token() {
        let session = MemorySession::new("tok-123");
        session.terminate();
        assert_eq!(session.access_token(), None);
        assert!(session.is_terminated());
    }
}
