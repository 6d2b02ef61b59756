//! Dashboard side navigation. The entries are placeholders; `children`
//! renders at the bottom and carries the logout control.

use crate::features::dashboard::NAV_ITEMS;
use leptos::prelude::*;

#[component]
pub fn Sidebar(children: Children) -> impl IntoView {
    view! {
        <aside class="w-60 flex flex-col justify-between bg-slate-700 p-5 text-white">
            <nav class="flex flex-col">
                <h2 class="mb-6 text-center text-xl font-semibold">"SmartStudy"</h2>
                {NAV_ITEMS
                    .into_iter()
                    .map(|label| {
                        view! {
                            <button
                                type="button"
                                class="p-3 text-left text-base bg-transparent hover:bg-slate-600 rounded"
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            {children()}
        </aside>
    }
}
