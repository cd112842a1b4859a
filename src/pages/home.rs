//! Home page listing the sections the current role may enter.

use leptos::prelude::*;

use crate::router::guard::role_allowed;
use crate::router::routes;
use crate::state::session::SessionStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    view! {
        <section class="home-page">
            <h1>"Centro Médico"</h1>
            <p class="home-page__user">
                {move || {
                    session
                        .get()
                        .user
                        .map(|u| format!("Sesión iniciada como {}", u.usuario))
                }}
            </p>
            <nav class="home-page__sections">
                {move || {
                    let role = session.get().role();
                    routes::TABLE
                        .iter()
                        .filter(|r| r.requires_auth && r.path != routes::HOME_PATH)
                        .filter(|r| role_allowed(r, role.as_ref()))
                        .map(|r| view! { <a class="home-page__card" href=r.path>{r.title}</a> })
                        .collect::<Vec<_>>()
                }}
            </nav>
        </section>
    }
}
