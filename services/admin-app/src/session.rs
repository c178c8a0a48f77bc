//! Session wiring for the running app
//!
//! The bearer credential and the logout trigger reach the fetch layer
//! through an installed [`Session`], never through ambient globals, so
//! tests can substitute their own implementation.

use std::sync::{Arc, OnceLock, RwLock};

use jokehub_api::{MemorySession, Session};

/// Holder for the session the fetch layer attaches to outgoing requests
pub struct SessionSlot {
    inner: RwLock<Option<Arc<dyn Session>>>,
}

impl SessionSlot {
    pub const fn empty() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    pub fn install(&self, session: Arc<dyn Session>) {
        *self.inner.write().expect("session slot poisoned") = Some(session);
    }

    /// The installed session, or an anonymous one before any install.
    pub fn active(&self) -> Arc<dyn Session> {
        if let Some(session) = self.inner.read().expect("session slot poisoned").clone() {
            return session;
        }
        anonymous()
    }
}

static ACTIVE: SessionSlot = SessionSlot::empty();

fn anonymous() -> Arc<dyn Session> {
    static ANONYMOUS: OnceLock<Arc<MemorySession>> = OnceLock::new();
    ANONYMOUS
        .get_or_init(|| Arc::new(MemorySession::anonymous()))
        .clone()
}

/// Install the session used by every subsequent request.
pub fn install(session: Arc<dyn Session>) {
    ACTIVE.install(session);
}

/// The session currently attached to outgoing requests
pub fn active() -> Arc<dyn Session> {
    ACTIVE.active()
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
const TOKEN_KEY: &str = "jokehub.access_token";

/// Session backed by browser localStorage. Terminating drops the stored
/// credential and navigates to the login page.
#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct BrowserSession;

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
impl Session for BrowserSession {
    fn access_token(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(TOKEN_KEY).ok()?
    }

    fn terminate(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
            let _ = window.location().set_href("/login");
        }
    }
}
