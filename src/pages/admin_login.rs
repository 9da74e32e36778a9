//! Administrator sign-in page.

use leptos::prelude::*;

use crate::components::login_form::LoginForm;
use crate::session::token_store::UserType;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! {
        <div class="login-page login-page--admin">
            <LoginForm user_type=UserType::Admin heading="Administrator Console"/>
            <a class="login-page__switch" href="/login">
                "Staff sign-in"
            </a>
        </div>
    }
}
