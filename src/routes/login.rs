//! Login route. Drives [`LoginFlow`] and navigates to the dashboard once the
//! session record has been written.

use crate::{
    components::{Alert, AlertKind, AuthCard, Spinner, SubmitButton},
    features::auth::{
        login::{LoginFlow, LoginStep, login},
        state::{AuthUnavailable, use_auth},
        types::LoginRequest,
    },
};
use leptos::{ev::SubmitEvent, html, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let Some(auth) = use_auth() else {
        return view! { <AuthUnavailable /> }.into_any();
    };
    let navigate = use_navigate();
    let flow = RwSignal::new(LoginFlow::new());
    let password_input = NodeRef::<html::Input>::new();

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        let auth = auth.clone();
        async move { login(&auth.api, auth.store.as_ref(), &request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            let mut target = None;
            flow.update(|current| match std::mem::take(current).resolve(&result) {
                LoginStep::Navigate(to) => target = Some(to),
                LoginStep::Stay(next) => *current = next,
            });
            if let Some(to) = target {
                navigate(to, Default::default());
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let mut request = None;
        flow.update(|current| {
            let (next, submitted) = std::mem::take(current).submit();
            *current = next;
            request = Some(submitted);
        });
        if let Some(input) = password_input.get() {
            input.set_value("");
        }
        if let Some(request) = request {
            login_action.dispatch(request);
        }
    };

    view! {
        <AuthCard title="Login">
            <form on:submit=on_submit>
                <input
                    class="w-full mb-3 p-2.5 rounded-md border border-gray-300"
                    type="email"
                    placeholder="Email"
                    autocomplete="email"
                    prop:value=move || flow.with(|current| current.email().to_string())
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        flow.update(|current| *current = std::mem::take(current).with_email(value));
                    }
                />
                <input
                    node_ref=password_input
                    class="w-full mb-3 p-2.5 rounded-md border border-gray-300"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        flow.update(|current| *current = std::mem::take(current).with_password(value));
                    }
                />
                <SubmitButton disabled=login_action.pending()>"Login"</SubmitButton>
            </form>
            {move || login_action.pending().get().then(|| view! { <Spinner /> })}
            {move || {
                flow.with(|current| current.error().map(str::to_string))
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}
            <p class="mt-3 text-sm">
                "Don't have an account? "
                <A href=LoginFlow::register_link() {..} class="text-blue-500 cursor-pointer">
                    "Register here"
                </A>
            </p>
        </AuthCard>
    }
    .into_any()
}
