//! Persisted session record. The record lives under a single storage key and
//! its presence is the only signal that the user is signed in. Nothing else
//! caches a copy: every read goes through a [`SessionStore`].

use crate::{app_lib::AppError, features::auth::types::SessionRecord};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Storage key holding the serialized session record.
pub const SESSION_STORAGE_KEY: &str = "user";

/// Read/write access to the persisted session record. Each call replaces
/// or removes the whole record, so readers never see a partial one.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<SessionRecord>;

    /// # Errors
    /// Returns `AppError::Storage` when the record cannot be persisted.
    fn set(&self, record: &SessionRecord) -> Result<(), AppError>;

    /// Removes the record. Removing an absent record is not an error.
    fn clear(&self);
}

pub fn encode_record(record: &SessionRecord) -> Result<String, AppError> {
    serde_json::to_string(record)
        .map_err(|err| AppError::Serialization(format!("Failed to encode session: {err}")))
}

/// Decodes a stored record. Unreadable data counts as no session.
pub fn decode_record(raw: &str) -> Option<SessionRecord> {
    match serde_json::from_str(raw) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!(error = %err, "ignoring unreadable session record");
            None
        }
    }
}

/// In-memory store holding the serialized record, as the browser does.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw stored text, which need not be valid.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<SessionRecord> {
        self.raw().as_deref().and_then(decode_record)
    }

    fn set(&self, record: &SessionRecord) -> Result<(), AppError> {
        let encoded = encode_record(record)?;
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = Some(encoded);
        Ok(())
    }

    fn clear(&self) {
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// `window.localStorage` backed store. The storage handle is looked up on
/// every call so the store itself stays `Send + Sync`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub struct BrowserSessionStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl BrowserSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for BrowserSessionStore {
    fn default() -> Self {
        Self::new(SESSION_STORAGE_KEY)
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSessionStore {
    fn get(&self) -> Option<SessionRecord> {
        let raw = Self::storage()?.get_item(&self.key).ok().flatten()?;
        decode_record(&raw)
    }

    fn set(&self, record: &SessionRecord) -> Result<(), AppError> {
        let encoded = encode_record(record)?;
        let storage = Self::storage()
            .ok_or_else(|| AppError::Storage("Local storage is unavailable.".to_string()))?;
        storage
            .set_item(&self.key, &encoded)
            .map_err(|_| AppError::Storage("Failed to persist the session.".to_string()))
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(&self.key).is_err() {
                warn!("failed to remove the session record");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{MemorySessionStore, SessionStore, decode_record, encode_record};
    use crate::features::auth::types::SessionRecord;
    use serde_json::json;

    fn alice() -> SessionRecord {
        SessionRecord::from_user(json!({
            "username": "alice",
            "role": "student",
            "created_at": "2024-01-01"
        }))
        .unwrap()
    }

    #[test]
    fn memory_store_set_get_clear() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(), None);

        store.set(&alice()).unwrap();
        assert_eq!(store.get(), Some(alice()));

        store.clear();
        assert_eq!(store.get(), None);
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn set_replaces_the_previous_record() {
        let store = MemorySessionStore::new();
        store.set(&alice()).unwrap();

        let bob = SessionRecord::from_user(json!({ "username": "bob" })).unwrap();
        store.set(&bob).unwrap();

        assert_eq!(store.get(), Some(bob));
    }

    #[test]
    fn clear_is_idempotent() {
        let store = MemorySessionStore::new();
        store.clear();
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn unreadable_records_count_as_absent() {
        let store = MemorySessionStore::with_raw("undefined");
        assert_eq!(store.get(), None);
        assert_eq!(decode_record("[1, 2]"), None);
        assert_eq!(decode_record("null"), None);
    }

    #[test]
    fn stored_records_are_not_reshaped() {
        let raw = r#"{"username":42,"role":null,"nickname":"al"}"#;
        let store = MemorySessionStore::with_raw(raw);
        let record = store.get().unwrap();
        assert_eq!(record.username(), "42");

        store.set(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&store.raw().unwrap()).unwrap();
        assert_eq!(value, json!({ "username": 42, "role": null, "nickname": "al" }));
    }

    #[test]
    fn records_are_stored_as_json() {
        let encoded = encode_record(&alice()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(
            value,
            json!({ "username": "alice", "role": "student", "created_at": "2024-01-01" })
        );
    }
}
