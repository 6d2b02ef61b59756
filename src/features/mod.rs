//! Domain-level frontend features (auth, dashboard) and their shared logic.
//! Routes import these modules to keep view code focused while keeping
//! session handling and API calls in dedicated feature areas.

pub mod auth;
pub mod dashboard;
