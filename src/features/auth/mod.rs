//! Auth feature module covering registration, login, the persisted session
//! record and the session gate. It keeps authentication logic out of the UI
//! so the flows can be driven and tested without a browser. This module
//! touches passwords and must never log them.
//!
//! Flow Overview: Registration posts the form and reports the outcome in
//! place. Login posts credentials, persists the returned user and only then
//! navigates to the dashboard. The dashboard checks for the record on every
//! mount and logout removes it.

pub mod client;
pub mod errors;
pub mod guards;
pub mod login;
pub mod register;
pub mod session;
#[cfg(target_arch = "wasm32")]
pub mod state;
pub mod types;

pub use errors::AuthError;
pub use guards::{Access, check_access, logout};
pub use session::{MemorySessionStore, SESSION_STORAGE_KEY, SessionStore};
pub use types::{Role, SessionRecord};
