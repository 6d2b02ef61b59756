//! Registration route. Reports the outcome in place; it never signs the user
//! in or navigates away.

use crate::{
    components::{Alert, AlertKind, AuthCard, Spinner, SubmitButton},
    features::auth::{
        register::{RegisterFlow, RegisterStatus, register},
        state::{AuthUnavailable, use_auth},
        types::{RegisterRequest, Role},
    },
};
use leptos::{ev::SubmitEvent, html, prelude::*};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let Some(auth) = use_auth() else {
        return view! { <AuthUnavailable /> }.into_any();
    };
    let flow = RwSignal::new(RegisterFlow::new());
    let password_input = NodeRef::<html::Input>::new();

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        let api = auth.api.clone();
        async move { register(&api, &request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            flow.update(|current| *current = std::mem::take(current).resolve(&result));
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
            register_action.dispatch(request);
        }
    };

    let message = move || {
        flow.with(|current| match current.status() {
            RegisterStatus::Succeeded(message) => Some((AlertKind::Success, message.clone())),
            RegisterStatus::Failed(message) => Some((AlertKind::Error, message.clone())),
            RegisterStatus::Idle | RegisterStatus::Submitting => None,
        })
    };

    view! {
        <AuthCard title="Create Account">
            <form on:submit=on_submit>
                <input
                    class="w-full mb-3 p-2.5 rounded-md border border-gray-300"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || flow.with(|current| current.username().to_string())
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        flow.update(|current| *current = std::mem::take(current).with_username(value));
                    }
                />
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
                    autocomplete="new-password"
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        flow.update(|current| *current = std::mem::take(current).with_password(value));
                    }
                />
                <select
                    class="w-full mb-3 p-2.5 rounded-md border border-gray-300"
                    on:change=move |event| {
                        if let Ok(role) = event_target_value(&event).parse::<Role>() {
                            flow.update(|current| *current = std::mem::take(current).with_role(role));
                        }
                    }
                >
                    {Role::ALL
                        .into_iter()
                        .map(|role| {
                            view! {
                                <option
                                    value=role.as_str()
                                    selected=move || flow.with(|current| current.role() == role)
                                >
                                    {role.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <SubmitButton
                    disabled=register_action.pending()
                    tone="bg-green-600 hover:bg-green-700"
                >
                    "Register"
                </SubmitButton>
            </form>
            {move || register_action.pending().get().then(|| view! { <Spinner /> })}
            {move || message().map(|(kind, message)| view! { <Alert kind=kind message=message /> })}
        </AuthCard>
    }
    .into_any()
}
