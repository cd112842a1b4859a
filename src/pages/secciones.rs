//! Section pages, one per backend entity.
//!
//! Each page fetches its resource list on mount and renders a one-line
//! summary per record. The pages are intentionally thin; they exist to give
//! the router real targets behind the guard.

use leptos::prelude::*;

use crate::net::error::ApiError;

/// Shared list body: loading fallback, error line, or one `<li>` per item.
fn section_body<T: Clone + 'static>(
    items: LocalResource<Result<Vec<T>, ApiError>>,
    label: fn(&T) -> String,
) -> impl IntoView {
    view! {
        <Suspense fallback=|| view! { <p>"Cargando..."</p> }>
            {move || {
                items
                    .get()
                    .map(|result| match result {
                        Ok(list) => {
                            view! {
                                <ul class="section-page__list">
                                    {list
                                        .iter()
                                        .map(|item| view! { <li>{label(item)}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                        Err(err) => {
                            view! { <p class="section-page__error">{err.to_string()}</p> }
                                .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}

#[component]
pub fn PacientesPage() -> impl IntoView {
    let items = LocalResource::new(|| crate::net::pacientes::list());
    view! {
        <section class="section-page">
            <h1>"Pacientes"</h1>
            {section_body(items, |p| format!("{} {}", p.nombre, p.apellidos))}
        </section>
    }
}

#[component]
pub fn DoctoresPage() -> impl IntoView {
    let items = LocalResource::new(|| crate::net::doctores::list());
    view! {
        <section class="section-page">
            <h1>"Doctores"</h1>
            {section_body(items, |d| {
                match &d.especialidad {
                    Some(esp) => format!("{} {} ({esp})", d.nombre, d.apellidos),
                    None => format!("{} {}", d.nombre, d.apellidos),
                }
            })}
        </section>
    }
}

#[component]
pub fn CitasPage() -> impl IntoView {
    let items = LocalResource::new(|| crate::net::citas::list(None));
    view! {
        <section class="section-page">
            <h1>"Citas"</h1>
            {section_body(items, |c| {
                format!(
                    "#{} — {} ({})",
                    c.codigo,
                    c.fecha_hora,
                    c.estado.as_deref().unwrap_or("sin estado")
                )
            })}
        </section>
    }
}

#[component]
pub fn ConsultasPage() -> impl IntoView {
    let items = LocalResource::new(|| crate::net::consultas::list(None));
    view! {
        <section class="section-page">
            <h1>"Consultas"</h1>
            {section_body(items, |c| {
                format!(
                    "#{} {}",
                    c.codigo,
                    c.tipo_de_consulta.as_deref().unwrap_or("Consulta")
                )
            })}
        </section>
    }
}

#[component]
pub fn FacturacionPage() -> impl IntoView {
    let items = LocalResource::new(|| crate::net::facturacion::list(None));
    view! {
        <section class="section-page">
            <h1>"Facturación"</h1>
            {section_body(items, |f| {
                format!(
                    "{} — Q{:.2}",
                    f.numero_factura.as_deref().unwrap_or("(sin número)"),
                    f.monto
                )
            })}
        </section>
    }
}

#[component]
pub fn RecetasPage() -> impl IntoView {
    let items = LocalResource::new(|| crate::net::recetas::list(None));
    view! {
        <section class="section-page">
            <h1>"Recetas"</h1>
            {section_body(items, |r| {
                format!(
                    "#{} {}",
                    r.codigo,
                    r.medicamento.as_deref().unwrap_or("(sin medicamento)")
                )
            })}
        </section>
    }
}

#[component]
pub fn HistorialPage() -> impl IntoView {
    let items = LocalResource::new(|| crate::net::historial::list(None));
    view! {
        <section class="section-page">
            <h1>"Historial Médico"</h1>
            {section_body(items, |h| {
                format!(
                    "#{} {}",
                    h.codigo_historial,
                    h.diagnostico.as_deref().unwrap_or("(sin diagnóstico)")
                )
            })}
        </section>
    }
}

#[component]
pub fn ExamenesPage() -> impl IntoView {
    let items = LocalResource::new(|| crate::net::examenes::list(None));
    view! {
        <section class="section-page">
            <h1>"Exámenes"</h1>
            {section_body(items, |e| {
                format!(
                    "#{} {} ({})",
                    e.codigo,
                    e.tipo_examen,
                    e.estado.as_deref().unwrap_or("pendiente")
                )
            })}
        </section>
    }
}

#[component]
pub fn UsuariosPage() -> impl IntoView {
    let items = LocalResource::new(|| crate::net::usuarios::list(None));
    view! {
        <section class="section-page">
            <h1>"Usuarios"</h1>
            {section_body(items, |u| {
                format!("{} — {}", u.usuario, u.rol.as_deref().unwrap_or("sin rol"))
            })}
        </section>
    }
}
