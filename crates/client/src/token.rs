//! Session token storage.
//!
//! The bearer token lives in whatever persisted session storage the host
//! application provides; the client only ever reads it through this trait.
//! Token *contents* are opaque here — decoding and refresh belong to the
//! auth layer, not the REST client.

use std::sync::{Arc, RwLock};

/// Persisted-session abstraction the client reads the bearer token from.
pub trait TokenStore: Send + Sync {
    /// The current access token, if a session exists.
    fn access_token(&self) -> Option<String>;

    /// Replace the stored token (login / refresh).
    fn set_access_token(&self, token: Option<String>);

    /// Drop the session entirely (logout).
    fn clear(&self) {
        self.set_access_token(None);
    }
}

/// Process-local token store, handed to the application root at startup.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set_access_token(Some(token.into()));
        store
    }
}

impl TokenStore for InMemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn set_access_token(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }
}
