use std::collections::HashMap;
use std::sync::{Arc, RwLock};

// --- Session key contract ---

// The login flow stores one serialized identity blob per principal kind.
// Several historical keys coexist; any non-empty value counts as a session.
pub const USER_KEY: &str = "user";
pub const READER_KEY: &str = "reader";
pub const ADMIN_KEY: &str = "admin";
pub const SUPER_KEY: &str = "super";

/// Every key the authentication predicate consults, in check order.
pub const IDENTITY_KEYS: [&str; 4] = [USER_KEY, READER_KEY, ADMIN_KEY, SUPER_KEY];

/// SessionStore
///
/// Defines the abstract contract for reading the session-scoped key/value
/// store that holds serialized identity blobs. The routing layer only ever
/// reads it: blobs are written at login and cleared at logout elsewhere.
/// Keeping it behind a trait lets the navigation guard and role resolver run
/// against an in-memory store in tests instead of a real storage backend.
pub trait SessionStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

/// SessionState
///
/// The concrete type used to share session access across the application state.
pub type SessionState = Arc<dyn SessionStore>;

/// is_authenticated
///
/// The authentication predicate used by the navigation guard: a session is
/// considered logged in iff at least one identity key holds a non-empty value.
/// Presence is the sole signal; the blob contents are not inspected here.
pub fn is_authenticated(session: &dyn SessionStore) -> bool {
    IDENTITY_KEYS
        .iter()
        .any(|key| session.get(key).is_some_and(|value| !value.is_empty()))
}

/// MemorySessionStore
///
/// In-memory `SessionStore` used by the application bootstrap (a fresh
/// process starts logged out) and by tests. `insert` / `remove` / `clear`
/// cover the login and logout lifecycle.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a serialized identity blob under `key` (login).
    pub fn insert(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    /// Removes a single key (partial logout).
    pub fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }

    /// Clears the whole session (logout).
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        // A poisoned lock degrades to "absent" rather than panicking: the
        // guard and resolver must never fail past their boundary.
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }
}
