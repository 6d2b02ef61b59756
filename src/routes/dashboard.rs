//! Protected dashboard. The session gate runs before anything is built, so
//! an anonymous visit renders only the redirect back to the login page.

use crate::{
    components::Sidebar,
    features::{
        auth::{
            Access, check_access, logout,
            state::{AuthUnavailable, use_auth},
        },
        dashboard::DashboardContent,
    },
};
use leptos::prelude::*;
use leptos_router::{components::Redirect, hooks::use_navigate};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let Some(auth) = use_auth() else {
        return view! { <AuthUnavailable /> }.into_any();
    };

    match check_access(auth.store.get()) {
        Access::Redirect(target) => view! { <Redirect path=target /> }.into_any(),
        Access::Allow(record) => {
            let content = DashboardContent::for_session(&record);
            let navigate = use_navigate();
            let store = auth.store.clone();
            let on_logout = move |_| {
                let target = logout(store.as_ref());
                navigate(target, Default::default());
            };

            view! {
                <div class="flex h-screen">
                    <Sidebar>
                        <button
                            type="button"
                            class="rounded-md bg-red-400 p-3 text-white cursor-pointer"
                            on:click=on_logout
                        >
                            "Logout"
                        </button>
                    </Sidebar>
                    <main class="flex-1 bg-slate-50 p-10">
                        <h1 class="text-3xl font-semibold">{content.greeting}</h1>
                        <p>{content.role_line}</p>
                        <p>{content.created_line}</p>
                    </main>
                </div>
            }
            .into_any()
        }
    }
}
