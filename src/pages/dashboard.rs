//! Protected landing page: open incident reports and low-stock items at
//! a glance, plus sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::api::{reports, warehouse};
use crate::components::route_guard::STAFF_LOGIN_PATH;
use crate::net::client::Api;
use crate::session::lifecycle;
use crate::state::session::SessionState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let reports_api = api.clone();
    let open_reports = LocalResource::new(move || {
        let api = reports_api.clone();
        async move { reports::list(&api).await }
    });

    let stock_api = api.clone();
    let stock_items = LocalResource::new(move || {
        let api = stock_api.clone();
        async move { warehouse::list_items(&api).await }
    });

    let greeting = move || {
        session
            .get()
            .display_name()
            .map_or_else(|| "Signed in".to_owned(), ToOwned::to_owned)
    };

    let sign_out = move |_| {
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let user_type = api.store().current_user_type();
            lifecycle::logout(&api, user_type).await;
            session.set(SessionState::default());
            navigate(STAFF_LOGIN_PATH, NavigateOptions::default());
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Facility Console"</h1>
                <span class="dashboard-page__user">{greeting}</span>
                <button class="btn" on:click=sign_out>
                    "Sign out"
                </button>
            </header>

            <section class="dashboard-page__panel">
                <h2>"Open incident reports"</h2>
                <Suspense fallback=move || view! { <p>"Loading reports..."</p> }>
                    {move || {
                        open_reports.get().map(|result| match result {
                            Ok(envelope) => {
                                let open: Vec<_> = envelope
                                    .data
                                    .unwrap_or_default()
                                    .into_iter()
                                    .filter(|r| r.status != "closed")
                                    .collect();
                                view! {
                                    <ul class="dashboard-page__list">
                                        {open
                                            .into_iter()
                                            .map(|r| view! {
                                                <li>
                                                    <span class="dashboard-page__item-title">{r.title}</span>
                                                    <span class="dashboard-page__item-meta">{r.status}</span>
                                                </li>
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(err) => view! { <p class="dashboard-page__error">{err.to_string()}</p> }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </section>

            <section class="dashboard-page__panel">
                <h2>"Low stock"</h2>
                <Suspense fallback=move || view! { <p>"Loading inventory..."</p> }>
                    {move || {
                        stock_items.get().map(|result| match result {
                            Ok(envelope) => {
                                let low: Vec<_> = envelope
                                    .data
                                    .unwrap_or_default()
                                    .into_iter()
                                    .filter(|item| item.quantity < item.minimum_stock)
                                    .collect();
                                view! {
                                    <ul class="dashboard-page__list">
                                        {low
                                            .into_iter()
                                            .map(|item| view! {
                                                <li>
                                                    <span class="dashboard-page__item-title">{item.name}</span>
                                                    <span class="dashboard-page__item-meta">
                                                        {format!("{} {}", item.quantity, item.unit)}
                                                    </span>
                                                </li>
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(err) => view! { <p class="dashboard-page__error">{err.to_string()}</p> }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
