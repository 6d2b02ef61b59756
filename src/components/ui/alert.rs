//! Inline outcome messages for the auth forms. Messages come from the flows
//! and never include passwords.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "mt-3 text-sm text-red-600",
            AlertKind::Success => "mt-3 text-sm text-green-700",
        }
    }
}

/// Renders a message paragraph styled for its outcome.
#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    let role = match kind {
        AlertKind::Error => "alert",
        AlertKind::Success => "status",
    };

    view! { <p class=kind.class() role=role>{message}</p> }
}
