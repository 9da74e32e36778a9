//! Server-verified gate in front of the authenticated shell.
//!
//! Every pathname change re-enters `Checking` and asks `/auth/verify`
//! whether the current session may see the route; search- or hash-only
//! changes do not re-trigger. Any failure — including a 401 that has
//! already torn down the local credential — ends in a redirect to the
//! staff login screen, whichever user type failed.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::net::client::Api;
use crate::net::error::ApiError;
use crate::net::types::RouteContext;
use crate::session::lifecycle;

/// Where unauthorized navigations land. Always the staff login screen,
/// never `/admin/login`.
pub const STAFF_LOGIN_PATH: &str = "/login";

/// Per-navigation verification state. Terminal until the next pathname
/// change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Authorized,
    Unauthorized,
}

/// Map a verification outcome onto the guard state.
pub fn verdict(result: &Result<(), ApiError>) -> GuardState {
    match result {
        Ok(()) => GuardState::Authorized,
        Err(_) => GuardState::Unauthorized,
    }
}

/// Wraps the protected subtree; renders a loading indicator while the
/// server decides, the children once authorized, and a redirect to
/// [`STAFF_LOGIN_PATH`] otherwise.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let api = expect_context::<Api>();
    let location = use_location();
    let state = RwSignal::new(GuardState::Checking);

    Effect::new(move |_| {
        // Tracked read: pathname only. Search and hash still travel with
        // the verification request, but changing them alone re-checks
        // nothing.
        let pathname = location.pathname.get();
        let search = location.search.get_untracked();
        let hash = location.hash.get_untracked();

        state.set(GuardState::Checking);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let route = RouteContext::new(&pathname, &search, &hash);
            let result = lifecycle::verify_auth(&api, &route).await;
            if let Err(err) = &result {
                leptos::logging::warn!("route check for {} denied: {err}", route.route);
            }
            state.set(verdict(&result));
        });
    });

    view! {
        {move || match state.get() {
            GuardState::Checking => view! {
                <div class="route-guard__checking">"Checking session..."</div>
            }
                .into_any(),
            GuardState::Authorized => children().into_any(),
            GuardState::Unauthorized => {
                view! { <Redirect path=STAFF_LOGIN_PATH.to_owned()/> }.into_any()
            }
        }}
    }
}
