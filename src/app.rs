//! Root application component with routing, contexts, and the guard shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::navbar::NavBar;
use crate::net::http::QueryParams;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::secciones::{
    CitasPage, ConsultasPage, DoctoresPage, ExamenesPage, FacturacionPage, HistorialPage,
    PacientesPage, RecetasPage, UsuariosPage,
};
use crate::router::guard::{self, GuardDecision};
use crate::router::routes::{self, RouteDescriptor};
use crate::state::session::SessionStore;
use crate::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
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
/// Provides the shared session context and sets up client-side routing
/// behind the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::default());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/clinica.css"/>
        <Title text="Centro Médico"/>

        <Router>
            <NavigationGuard/>
            <NavBar/>
            <main>
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("pacientes") view=PacientesPage/>
                    <Route path=StaticSegment("doctores") view=DoctoresPage/>
                    <Route path=StaticSegment("citas") view=CitasPage/>
                    <Route path=StaticSegment("consultas") view=ConsultasPage/>
                    <Route path=StaticSegment("facturacion") view=FacturacionPage/>
                    <Route path=StaticSegment("recetas") view=RecetasPage/>
                    <Route path=StaticSegment("historial") view=HistorialPage/>
                    <Route path=StaticSegment("examenes") view=ExamenesPage/>
                    <Route path=StaticSegment("usuarios") view=UsuariosPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Invisible component that applies the guard to every navigation and owns
/// the session-expired subscription.
///
/// Guard evaluations are serialized by the router: each location change
/// runs the effect once and applies exactly one proceed-or-redirect.
#[component]
fn NavigationGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    let location = use_location();

    // The HTTP layer signals intercepted 401s here; clearing the persisted
    // session already happened inside the interceptor.
    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        let mut expired = crate::net::http::subscribe_session_expired();
        leptos::task::spawn_local(async move {
            use futures::StreamExt;
            while expired.next().await.is_some() {
                session.update(|s| {
                    s.user = None;
                    s.token = None;
                });
                navigate(routes::LOGIN_PATH, NavigateOptions::default());
            }
        });
    }

    Effect::new(move || {
        let path = location.pathname.get();
        let search = location.search.get();

        let route = routes::find(&path);
        set_document_title(route);
        let Some(route) = route else {
            return;
        };

        let full_path = if search.is_empty() {
            path.clone()
        } else {
            format!("{path}?{search}")
        };

        let mut state = session.get_untracked();
        let decision = guard::evaluate(route, &full_path, &mut state, &BrowserStorage);
        session.set(state);

        match decision {
            GuardDecision::Proceed => {}
            GuardDecision::RedirectLogin { redirect } => {
                let mut query = QueryParams::new();
                query.push("redirect", &redirect);
                navigate(
                    &format!("{}{}", routes::LOGIN_PATH, query.to_query_string()),
                    NavigateOptions::default(),
                );
            }
            GuardDecision::RedirectHome => {
                navigate(routes::HOME_PATH, NavigateOptions::default());
            }
        }
    });
}

fn set_document_title(route: Option<&RouteDescriptor>) {
    let title = routes::page_title(route);
    #[cfg(feature = "hydrate")]
    {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&title);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = title;
    }
}
