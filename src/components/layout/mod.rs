//! Layout components shared across routes.

mod auth_card;
mod sidebar;

pub use auth_card::AuthCard;
pub use sidebar::Sidebar;
