//! Login page.
//!
//! Submits credentials through the session store and, on success, navigates
//! to the `redirect` query parameter left by the guard (or home).

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::auth::{HttpAuthApi, LoginRequest};
use crate::router::routes;
use crate::state::session::SessionStore;
use crate::storage::BrowserStorage;

/// Login form bound to the shared session store.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let usuario = RwSignal::new(String::new());
    let contrasena = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginRequest {
            usuario: usuario.get_untracked(),
            contrasena: contrasena.get_untracked(),
        };
        let target = query
            .with_untracked(|q| q.get("redirect"))
            .unwrap_or_else(|| routes::HOME_PATH.to_owned());
        let navigate = navigate.clone();
        session.update(|s| {
            s.loading = true;
            s.error = None;
        });
        leptos::task::spawn_local(async move {
            let mut state = session.get_untracked();
            let outcome = state
                .login(&HttpAuthApi, &BrowserStorage, credentials)
                .await;
            session.set(state);
            if outcome.is_ok() {
                navigate(&target, NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Centro Médico"</h1>
            <form class="login-page__form" on:submit=on_submit>
                <label>
                    "Usuario"
                    <input
                        type="text"
                        prop:value=move || usuario.get()
                        on:input=move |ev| usuario.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Contraseña"
                    <input
                        type="password"
                        prop:value=move || contrasena.get()
                        on:input=move |ev| contrasena.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || session.get().error.is_some()>
                    <p class="login-page__error">{move || session.get().error}</p>
                </Show>
                <button type="submit" disabled=move || session.get().loading>
                    {move || if session.get().loading { "Ingresando..." } else { "Iniciar Sesión" }}
                </button>
            </form>
        </div>
    }
}
