//! Explicit session object.
//!
//! The session owns the bearer token and user snapshot for the lifetime of
//! the app, with explicit init and teardown: it is established on login,
//! cleared on logout, and cleared unconditionally when the backend answers
//! 401. An optional [`SessionStoreTrait`] lets the host persist the state
//! across launches; the live session is the single source of truth.

use std::sync::{Arc, RwLock};

use log::debug;
use serde::{Deserialize, Serialize};

use timevalue_core::errors::Result;

use crate::models::UserInfo;

/// The persisted authentication state: token plus user snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub token: String,
    pub user: UserInfo,
}

/// Host-provided persistence for the session state.
pub trait SessionStoreTrait: Send + Sync {
    fn load(&self) -> Result<Option<AuthState>>;
    fn save(&self, state: &AuthState) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// In-memory session store, used in tests and by hosts without
/// persistence.
#[derive(Default)]
pub struct MemorySessionStore {
    state: RwLock<Option<AuthState>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStoreTrait for MemorySessionStore {
    fn load(&self) -> Result<Option<AuthState>> {
        Ok(self.state.read().expect("session store lock").clone())
    }

    fn save(&self, state: &AuthState) -> Result<()> {
        *self.state.write().expect("session store lock") = Some(state.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.state.write().expect("session store lock") = None;
        Ok(())
    }
}

/// Live session state shared by the API client and the auth flows.
pub struct Session {
    state: RwLock<Option<AuthState>>,
    store: Option<Arc<dyn SessionStoreTrait>>,
}

impl Session {
    /// A session with no persistence.
    pub fn new() -> Self {
        Session {
            state: RwLock::new(None),
            store: None,
        }
    }

    /// A session backed by a store; previously persisted state is loaded
    /// immediately.
    pub fn with_store(store: Arc<dyn SessionStoreTrait>) -> Result<Self> {
        let state = store.load()?;
        Ok(Session {
            state: RwLock::new(state),
            store: Some(store),
        })
    }

    /// Installs a fresh token and user after a successful login.
    pub fn establish(&self, token: String, user: UserInfo) {
        let state = AuthState { token, user };
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&state) {
                debug!("Failed to persist session state: {}", e);
            }
        }
        *self.state.write().expect("session lock") = Some(state);
    }

    /// Current bearer token, if authenticated.
    pub fn token(&self) -> Option<String> {
        self.state
            .read()
            .expect("session lock")
            .as_ref()
            .map(|s| s.token.clone())
    }

    /// Current user snapshot, if authenticated.
    pub fn user(&self) -> Option<UserInfo> {
        self.state
            .read()
            .expect("session lock")
            .as_ref()
            .map(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().expect("session lock").is_some()
    }

    /// Tears the session down: called on logout and on any 401 response.
    pub fn clear(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.clear() {
                debug!("Failed to clear persisted session state: {}", e);
            }
        }
        *self.state.write().expect("session lock") = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            nickname: Some("Kai".to_string()),
            avatar_url: None,
            openid: None,
        }
    }

    #[test]
    fn test_establish_and_clear() {
        let session = Session::new();
        assert!(!session.is_authenticated());

        session.establish("tok".to_string(), user());
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok"));

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_store_round_trip() {
        let store = Arc::new(MemorySessionStore::new());
        {
            let session = Session::with_store(store.clone()).unwrap();
            session.establish("tok".to_string(), user());
        }
        // A fresh session sees the persisted state
        let session = Session::with_store(store.clone()).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().id, "u1");

        session.clear();
        let session = Session::with_store(store).unwrap();
        assert!(!session.is_authenticated());
    }
}
