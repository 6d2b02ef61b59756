use leptos::prelude::*;

/// Centered card used by the login and registration pages.
#[component]
pub fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-slate-100">
            <div class="w-80 rounded-xl bg-white p-8 shadow-md">
                <h2 class="mb-4 text-xl font-semibold">{title}</h2>
                {children()}
            </div>
        </div>
    }
}
