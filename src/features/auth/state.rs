//! Auth context for the frontend. The provider builds the API client and the
//! session store once and shares them through Leptos context. It holds the
//! store handle, never a copy of the record, so every read sees what is
//! persisted.

use crate::{
    app_lib::{ApiClient, config::AppConfig},
    components::{Alert, AlertKind},
    features::auth::session::{BrowserSessionStore, SessionStore},
};
use leptos::prelude::*;
use std::sync::Arc;
use tracing::{debug, error};

/// Auth services shared through Leptos.
#[derive(Clone)]
pub struct AuthContext {
    pub api: ApiClient,
    pub store: Arc<dyn SessionStore>,
}

impl AuthContext {
    pub fn new(api: ApiClient, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }
}

/// Provides the auth context, or an error banner when the backend URL is
/// misconfigured.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let config = AppConfig::load();
    match ApiClient::new(&config.api_base_url) {
        Ok(api) => {
            debug!(api = %api.base_url(), "auth context ready");
            provide_context(AuthContext::new(
                api,
                Arc::new(BrowserSessionStore::default()),
            ));
            children().into_any()
        }
        Err(err) => {
            error!(error = %err, "cannot start without a valid API base URL");
            view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
        }
    }
}

/// Message shown when a page renders without the auth context.
pub const AUTH_UNAVAILABLE_MESSAGE: &str = "Sign-in is unavailable right now.";

/// Returns the auth context provided by [`AuthProvider`], if any.
pub fn use_auth() -> Option<AuthContext> {
    use_context::<AuthContext>()
}

/// Rendered in place of a page that found no [`AuthContext`].
#[component]
pub fn AuthUnavailable() -> impl IntoView {
    error!("page rendered outside the auth provider");
    view! { <Alert kind=AlertKind::Error message=AUTH_UNAVAILABLE_MESSAGE /> }
}
