//! Session Store
//!
//! Token and user profile persisted under the `token` and `user` keys.
//! The storage medium sits behind [`SessionStorage`] so pages never touch
//! browser storage directly.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::models::{TokenResponse, User};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Key/value medium backing the session
pub trait SessionStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl SessionStorage for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) {
        let written = Self::storage().map(|storage| storage.set_item(key, value).is_ok());
        if written != Some(true) {
            tracing::warn!(key, "localStorage write failed");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory storage, for tests and storage-less environments
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Authenticated browser context
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.user.is_admin
    }
}

/// Get/set/clear over a [`SessionStorage`]
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self { storage: Rc::new(storage) }
    }

    /// Read the stored session.
    ///
    /// A missing token or an unparseable user record counts as logged out;
    /// malformed leftovers are removed.
    pub fn load(&self) -> Option<Session> {
        let raw_user = self.storage.read(USER_KEY)?;
        let user = match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(error = %err, "discarding malformed stored user");
                self.clear();
                return None;
            }
        };
        match self.token() {
            Some(token) => Some(Session { token, user }),
            None => {
                self.clear();
                None
            }
        }
    }

    /// Persist a fresh login
    pub fn save(&self, response: &TokenResponse) -> Result<Session, serde_json::Error> {
        let user_json = serde_json::to_string(&response.user)?;
        self.storage.write(TOKEN_KEY, &response.access_token);
        self.storage.write(USER_KEY, &user_json);
        Ok(Session {
            token: response.access_token.clone(),
            user: response.user.clone(),
        })
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    pub fn token(&self) -> Option<String> {
        self.storage.read(TOKEN_KEY).filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{citizen, token_response};

    #[test]
    fn test_empty_storage_is_logged_out() {
        let store = SessionStore::new(MemoryStorage::default());
        assert!(store.load().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::default();
        let store = SessionStore::new(storage.clone());
        let saved = store.save(&token_response(citizen())).unwrap();

        assert_eq!(storage.read(TOKEN_KEY).as_deref(), Some("test-token"));
        assert_eq!(store.load(), Some(saved));
    }

    #[test]
    fn test_malformed_user_is_discarded() {
        let storage = MemoryStorage::default();
        storage.write(TOKEN_KEY, "test-token");
        storage.write(USER_KEY, r#"{"full_name":"Иван","is_admin":true}"#);

        let store = SessionStore::new(storage.clone());
        assert!(store.load().is_none());
        assert!(storage.read(USER_KEY).is_none());
        assert!(storage.read(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_user_without_token_is_logged_out() {
        let storage = MemoryStorage::default();
        let store = SessionStore::new(storage.clone());
        store.save(&token_response(citizen())).unwrap();
        storage.remove(TOKEN_KEY);

        assert!(store.load().is_none());
        assert!(storage.read(USER_KEY).is_none());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let storage = MemoryStorage::default();
        let store = SessionStore::new(storage.clone());
        store.save(&token_response(citizen())).unwrap();
        store.clear();

        assert!(storage.read(TOKEN_KEY).is_none());
        assert!(storage.read(USER_KEY).is_none());
    }
}
