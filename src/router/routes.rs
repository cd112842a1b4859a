//! Static route descriptors.
//!
//! DESIGN
//! ======
//! One descriptor per navigable view, defined once at startup and immutable.
//! Lookup is first-match-wins; in practice every path here is a unique
//! static segment. `requires_auth` defaults to true — only the login view
//! opts out. A route with no `allowed_roles` entry is open to any
//! authenticated role.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::role::Role;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// A navigable view and its access policy.
#[derive(Debug)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub requires_auth: bool,
    /// Roles allowed to enter; `None` means any authenticated role.
    pub allowed_roles: Option<&'static [Role]>,
}

const ANY_ROLE: Option<&[Role]> = None;

/// All navigable views. Some allowed sets list both `Recepcionista` and the
/// legacy `User` tag; redundant under the access-class mapping, kept until
/// the legacy tag is retired.
pub static TABLE: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: LOGIN_PATH,
        name: "login",
        title: "Iniciar Sesión",
        requires_auth: false,
        allowed_roles: ANY_ROLE,
    },
    RouteDescriptor {
        path: HOME_PATH,
        name: "home",
        title: "Inicio",
        requires_auth: true,
        allowed_roles: ANY_ROLE,
    },
    RouteDescriptor {
        path: "/pacientes",
        name: "pacientes",
        title: "Pacientes",
        requires_auth: true,
        allowed_roles: ANY_ROLE,
    },
    RouteDescriptor {
        path: "/doctores",
        name: "doctores",
        title: "Doctores",
        requires_auth: true,
        allowed_roles: Some(&[Role::Admin]),
    },
    RouteDescriptor {
        path: "/citas",
        name: "citas",
        title: "Citas",
        requires_auth: true,
        allowed_roles: Some(&[Role::Admin, Role::Doctor, Role::Recepcionista, Role::User]),
    },
    RouteDescriptor {
        path: "/consultas",
        name: "consultas",
        title: "Consultas",
        requires_auth: true,
        allowed_roles: Some(&[Role::Admin, Role::Doctor]),
    },
    RouteDescriptor {
        path: "/facturacion",
        name: "facturacion",
        title: "Facturación",
        requires_auth: true,
        allowed_roles: Some(&[Role::Admin, Role::Recepcionista, Role::User]),
    },
    RouteDescriptor {
        path: "/recetas",
        name: "recetas",
        title: "Recetas",
        requires_auth: true,
        allowed_roles: Some(&[Role::Admin, Role::Doctor]),
    },
    RouteDescriptor {
        path: "/historial",
        name: "historial",
        title: "Historial Médico",
        requires_auth: true,
        allowed_roles: Some(&[Role::Admin, Role::Doctor]),
    },
    RouteDescriptor {
        path: "/examenes",
        name: "examenes",
        title: "Exámenes",
        requires_auth: true,
        allowed_roles: Some(&[Role::Admin, Role::Doctor]),
    },
    RouteDescriptor {
        path: "/usuarios",
        name: "usuarios",
        title: "Usuarios",
        requires_auth: true,
        allowed_roles: Some(&[Role::Admin]),
    },
];

/// Find the descriptor for a path. Trailing slashes are ignored.
#[must_use]
pub fn find(path: &str) -> Option<&'static RouteDescriptor> {
    let normalized = normalize(path);
    TABLE.iter().find(|r| r.path == normalized)
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}

/// Document title for a view: `"{title} - Centro Médico"`, with a generic
/// label for unknown paths.
#[must_use]
pub fn page_title(route: Option<&RouteDescriptor>) -> String {
    let section = route.map_or("Sistema", |r| r.title);
    format!("{section} - Centro Médico")
}
