//! Session gate for protected views. The decision is a pure function of the
//! stored record and is made before the protected view is constructed, so
//! anonymous visitors never see a frame of protected content. This is a
//! presence check only; the client never validates expiry.

use crate::{
    features::auth::{session::SessionStore, types::SessionRecord},
    routes::paths,
};
use tracing::info;

#[derive(Clone, Debug, PartialEq)]
pub enum Access {
    Allow(SessionRecord),
    Redirect(&'static str),
}

pub fn check_access(session: Option<SessionRecord>) -> Access {
    match session {
        Some(record) => Access::Allow(record),
        None => Access::Redirect(paths::LOGIN),
    }
}

/// Ends the session and returns where to navigate. Safe to call repeatedly.
pub fn logout(store: &dyn SessionStore) -> &'static str {
    store.clear();
    info!("session cleared");
    paths::LOGIN
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{Access, check_access, logout};
    use crate::{
        features::auth::{
            session::{MemorySessionStore, SessionStore},
            types::SessionRecord,
        },
        routes::paths,
    };
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
    fn missing_session_redirects_to_login() {
        assert_eq!(check_access(None), Access::Redirect(paths::LOGIN));
    }

    #[test]
    fn present_session_is_allowed_without_validation() {
        let record = SessionRecord::from_user(json!({ "username": "ghost" })).unwrap();
        assert_eq!(check_access(Some(record.clone())), Access::Allow(record));
    }

    #[test]
    fn guard_reads_the_store_on_every_check() {
        let store = MemorySessionStore::new();
        assert_eq!(check_access(store.get()), Access::Redirect(paths::LOGIN));

        store.set(&alice()).unwrap();
        assert_eq!(check_access(store.get()), Access::Allow(alice()));

        logout(&store);
        assert_eq!(check_access(store.get()), Access::Redirect(paths::LOGIN));
    }

    #[test]
    fn logout_is_idempotent() {
        let store = MemorySessionStore::new();
        store.set(&alice()).unwrap();

        assert_eq!(logout(&store), paths::LOGIN);
        assert_eq!(logout(&store), paths::LOGIN);
        assert_eq!(store.get(), None);
    }
}
