//! Client-side routes. Exactly three locations map to a flow each; anything
//! else renders the not-found page. Navigation is push-only and happens on
//! explicit actions (login success, logout, the register link) or the
//! dashboard's session redirect.

/// Navigable locations.
pub mod paths {
    pub const LOGIN: &str = "/";
    pub const REGISTER: &str = "/register";
    pub const DASHBOARD: &str = "/dashboard";
}

/// The routed pages. `AppRoutes` registers one route per entry, built from
/// [`Page::segment`], so the router and the navigation targets share
/// [`paths`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Dashboard,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Login => paths::LOGIN,
            Page::Register => paths::REGISTER,
            Page::Dashboard => paths::DASHBOARD,
        }
    }

    /// Router segment for the page: its path without the leading slash.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }
}

#[cfg(target_arch = "wasm32")]
mod dashboard;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod not_found;
#[cfg(target_arch = "wasm32")]
mod register;

#[cfg(target_arch = "wasm32")]
pub use view::AppRoutes;

#[cfg(target_arch = "wasm32")]
mod view {
    use super::{
        Page, dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage,
        register::RegisterPage,
    };
    use leptos::prelude::*;
    use leptos_router::StaticSegment;
    use leptos_router::components::{Route, Routes};

    #[component]
    pub fn AppRoutes() -> impl IntoView {
        view! {
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=StaticSegment(Page::Login.segment()) view=LoginPage />
                <Route path=StaticSegment(Page::Register.segment()) view=RegisterPage />
                <Route path=StaticSegment(Page::Dashboard.segment()) view=DashboardPage />
            </Routes>
        }
    }
}
