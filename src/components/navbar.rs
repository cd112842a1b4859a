//! Top navigation bar, shown only while a session exists.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::HttpAuthApi;
use crate::router::guard::role_allowed;
use crate::router::routes;
use crate::state::session::SessionStore;
use crate::storage::BrowserStorage;

/// Section links filtered by the current role, plus logout.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let mut state = session.get_untracked();
            state.logout(&HttpAuthApi, &BrowserStorage).await;
            session.set(state);
            navigate(routes::LOGIN_PATH, NavigateOptions::default());
        });
    };

    view! {
        <Show when=move || session.get().is_authenticated()>
            <nav class="navbar">
                <a class="navbar__brand" href=routes::HOME_PATH>"Centro Médico"</a>
                {move || {
                    let role = session.get().role();
                    routes::TABLE
                        .iter()
                        .filter(|r| r.requires_auth && r.path != routes::HOME_PATH)
                        .filter(|r| role_allowed(r, role.as_ref()))
                        .map(|r| view! { <a href=r.path>{r.title}</a> })
                        .collect::<Vec<_>>()
                }}
                <button class="navbar__logout" on:click=on_logout.clone()>
                    "Cerrar Sesión"
                </button>
            </nav>
        </Show>
    }
}
