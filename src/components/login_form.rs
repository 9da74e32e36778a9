//! Credential form shared by the staff and admin sign-in pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::client::Api;
use crate::net::types::Credentials;
use crate::session::lifecycle;
use crate::session::token_store::UserType;
use crate::state::session::SessionState;

/// Username/password form that signs in as `user_type` and navigates to
/// the dashboard on success. Errors surface inline with the message the
/// error taxonomy carries.
#[component]
pub fn LoginForm(user_type: UserType, heading: &'static str) -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let credentials = Credentials {
            username: username.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
        };
        if credentials.username.is_empty() || credentials.password.is_empty() {
            error.set(Some("Enter a username and password.".to_owned()));
            return;
        }

        pending.set(true);
        error.set(None);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match lifecycle::sign_in(&api, user_type, &credentials).await {
                Ok(response) => {
                    session.set(SessionState::signed_in(user_type, response.user));
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => {
                    pending.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <form class="login-form" on:submit=submit>
            <h1 class="login-form__heading">{heading}</h1>

            <label class="login-form__label">
                "Username"
                <input
                    class="login-form__input"
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>

            <label class="login-form__label">
                "Password"
                <input
                    class="login-form__input"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>

            <Show when=move || error.get().is_some()>
                <p class="login-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}
