use leptos::prelude::*;

/// Full-width submit button, disabled while its flow is submitting so a
/// second click does not fire another request.
#[component]
pub fn SubmitButton(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(optional)] tone: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let tone = tone.unwrap_or("bg-blue-500 hover:bg-blue-600");
    let class = format!(
        "w-full py-3 rounded-md text-white font-bold cursor-pointer disabled:opacity-70 disabled:cursor-not-allowed {tone}"
    );

    view! {
        <button type="submit" class=class disabled=move || disabled.get()>
            {children()}
        </button>
    }
}
