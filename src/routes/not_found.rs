//! Fallback for locations outside the three known routes.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 text-center">
            <h1 class="text-6xl font-black text-slate-300">"404"</h1>
            <p class="text-slate-600">"The page you requested does not exist."</p>
            <A href=paths::LOGIN {..} class="text-blue-500">
                "Back to login"
            </A>
        </div>
    }
}
