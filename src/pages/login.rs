//! Staff sign-in page — the default landing spot for unauthenticated
//! (and unauthorized) navigations.

use leptos::prelude::*;

use crate::components::login_form::LoginForm;
use crate::session::token_store::UserType;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <LoginForm user_type=UserType::Staff heading="Facility Console"/>
            <a class="login-page__switch" href="/admin/login">
                "Administrator sign-in"
            </a>
        </div>
    }
}
