//! Shared UI components exported for routes and features.

pub mod layout;
pub mod ui;

pub use layout::{AuthCard, Sidebar};
pub use ui::{Alert, AlertKind, SubmitButton, Spinner};
