//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RequireAuth;
use crate::net::client::Api;
use crate::pages::{admin_login::AdminLoginPage, dashboard::DashboardPage, login::LoginPage};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the API client once and shares it, together with the
/// session state, through context. Everything behind the root route sits
/// inside the server-verified [`RequireAuth`] gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(Api::browser());
    provide_context(RwSignal::new(SessionState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/facility-console.css"/>
        <Title text="Facility Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("login"))
                    view=AdminLoginPage
                />
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <DashboardPage/>
                            </RequireAuth>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
