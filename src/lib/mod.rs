//! Shared frontend utilities for API access, configuration, errors and
//! logging.
//!
//! ## Backend contract
//!
//! 1. **Register:** `POST /auth/register` with `{username, email, password, role}`.
//!    Failures may carry `{"detail": "..."}`, which is shown to the user.
//! 2. **Login:** `POST /auth/login` with `{email, password}`. Success returns
//!    `{"user": {...}}`, which becomes the persisted session record.
//!
//! Paths are relative to the configured API base URL. Centralizing these
//! helpers keeps network behavior consistent and avoids duplicated logic in
//! routes and features. Callers must still avoid logging passwords.

pub mod api;
pub mod config;
pub mod errors;
pub mod telemetry;

pub use api::ApiClient;
pub use errors::AppError;
