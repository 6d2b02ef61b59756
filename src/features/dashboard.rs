//! Text shown on the protected dashboard, derived from the session record.
//! Values are displayed verbatim; `created_at` is never parsed.

use crate::features::auth::SessionRecord;

/// Sidebar entries. They are placeholders and do not navigate.
pub const NAV_ITEMS: [&str; 3] = ["Home", "Resources", "Profile"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardContent {
    pub greeting: String,
    pub role_line: String,
    pub created_line: String,
}

impl DashboardContent {
    pub fn for_session(record: &SessionRecord) -> Self {
        Self {
            greeting: format!("Welcome, {}", record.username()),
            role_line: format!("Your role: {}", record.role()),
            created_line: format!("Account created: {}", record.created_at()),
        }
    }
}
