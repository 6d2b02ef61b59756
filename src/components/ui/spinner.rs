use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="mt-3 mx-auto h-6 w-6 animate-spin rounded-full border-4 border-blue-200 border-t-blue-500"
            role="status"
            aria-label="Submitting"
        ></div>
    }
}
