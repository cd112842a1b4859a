use super::*;
use crate::net::usuarios::SystemUser;
use crate::router::routes;
use crate::storage::{MemoryStorage, SessionPersistence, TOKEN_KEY, USER_KEY};

fn user_with_role(rol: &str) -> SystemUser {
    SystemUser {
        codigo: 1,
        usuario: "prueba".to_owned(),
        rol: Some(rol.to_owned()),
        ..SystemUser::default()
    }
}

fn authenticated_store(storage: &MemoryStorage, rol: &str) -> SessionStore {
    let mut store = SessionStore::default();
    store.set_auth(storage, user_with_role(rol), Some("tok".to_owned()));
    store
}

fn route(path: &str) -> &'static routes::RouteDescriptor {
    routes::find(path).expect("route must exist")
}

// =============================================================================
// Unauthenticated navigation
// =============================================================================

#[test]
fn unauthed_protected_route_redirects_to_login_with_target() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::default();
    let decision = evaluate(route("/pacientes"), "/pacientes", &mut store, &storage);
    assert_eq!(
        decision,
        GuardDecision::RedirectLogin {
            redirect: "/pacientes".to_owned()
        }
    );
}

#[test]
fn redirect_preserves_query_string() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::default();
    let decision = evaluate(
        route("/citas"),
        "/citas?estado=Pendiente",
        &mut store,
        &storage,
    );
    assert_eq!(
        decision,
        GuardDecision::RedirectLogin {
            redirect: "/citas?estado=Pendiente".to_owned()
        }
    );
}

#[test]
fn unauthed_login_route_proceeds() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::default();
    let decision = evaluate(route("/login"), "/login", &mut store, &storage);
    assert_eq!(decision, GuardDecision::Proceed);
}

#[test]
fn persisted_session_is_recovered_before_deciding() {
    let storage = MemoryStorage::new();
    // A previous page load left a valid session behind.
    let _ = authenticated_store(&storage, "Doctor");

    let mut fresh = SessionStore::default();
    let decision = evaluate(route("/consultas"), "/consultas", &mut fresh, &storage);
    assert_eq!(decision, GuardDecision::Proceed);
    assert!(fresh.is_authenticated());
}

#[test]
fn corrupt_persisted_session_redirects_to_login() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "tok");
    storage.set(USER_KEY, "][");
    let mut store = SessionStore::default();
    let decision = evaluate(route("/pacientes"), "/pacientes", &mut store, &storage);
    assert_eq!(
        decision,
        GuardDecision::RedirectLogin {
            redirect: "/pacientes".to_owned()
        }
    );
    // Self-healed, not thrown.
    assert!(storage.get(USER_KEY).is_none());
}

// =============================================================================
// Authenticated navigation
// =============================================================================

#[test]
fn authed_user_on_login_route_goes_home() {
    let storage = MemoryStorage::new();
    let mut store = authenticated_store(&storage, "Admin");
    let decision = evaluate(route("/login"), "/login", &mut store, &storage);
    assert_eq!(decision, GuardDecision::RedirectHome);
}

#[test]
fn route_without_allowed_roles_admits_any_role() {
    let storage = MemoryStorage::new();
    let mut store = authenticated_store(&storage, "Enfermero");
    let decision = evaluate(route("/pacientes"), "/pacientes", &mut store, &storage);
    assert_eq!(decision, GuardDecision::Proceed);
}

#[test]
fn doctor_denied_on_admin_only_route() {
    let storage = MemoryStorage::new();
    let mut store = authenticated_store(&storage, "Doctor");
    let decision = evaluate(route("/usuarios"), "/usuarios", &mut store, &storage);
    assert_eq!(decision, GuardDecision::RedirectHome);
}

#[test]
fn admin_allowed_on_admin_only_route() {
    let storage = MemoryStorage::new();
    let mut store = authenticated_store(&storage, "Admin");
    let decision = evaluate(route("/usuarios"), "/usuarios", &mut store, &storage);
    assert_eq!(decision, GuardDecision::Proceed);
}

#[test]
fn user_without_role_denied_on_restricted_route() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::default();
    store.set_auth(
        &storage,
        SystemUser {
            codigo: 1,
            usuario: "sinrol".to_owned(),
            rol: None,
            ..SystemUser::default()
        },
        Some("tok".to_owned()),
    );
    let decision = evaluate(route("/citas"), "/citas", &mut store, &storage);
    assert_eq!(decision, GuardDecision::RedirectHome);
}

#[test]
fn storage_cleared_behind_an_authenticated_session_still_proceeds() {
    // The 401 handler may clear persistence between navigations; an
    // in-memory session stays authoritative for the current one.
    let storage = MemoryStorage::new();
    let mut store = authenticated_store(&storage, "Admin");
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
    let decision = evaluate(route("/pacientes"), "/pacientes", &mut store, &storage);
    assert_eq!(decision, GuardDecision::Proceed);
}

// =============================================================================
// Role equivalence (User ≡ Recepcionista)
// =============================================================================

#[test]
fn legacy_user_enters_facturacion() {
    let storage = MemoryStorage::new();
    let mut store = authenticated_store(&storage, "User");
    let decision = evaluate(route("/facturacion"), "/facturacion", &mut store, &storage);
    assert_eq!(decision, GuardDecision::Proceed);
}

#[test]
fn recepcionista_enters_citas() {
    let storage = MemoryStorage::new();
    let mut store = authenticated_store(&storage, "Recepcionista");
    let decision = evaluate(route("/citas"), "/citas", &mut store, &storage);
    assert_eq!(decision, GuardDecision::Proceed);
}

#[test]
fn equivalence_holds_for_either_listed_tag() {
    use crate::state::role::Role;
    let admitting_front_desk = routes::RouteDescriptor {
        path: "/prueba",
        name: "prueba",
        title: "Prueba",
        requires_auth: true,
        allowed_roles: Some(&[Role::Recepcionista]),
    };
    let storage = MemoryStorage::new();
    for tag in ["User", "Recepcionista"] {
        let mut store = authenticated_store(&storage, tag);
        let decision = evaluate(&admitting_front_desk, "/prueba", &mut store, &storage);
        assert_eq!(decision, GuardDecision::Proceed, "tag {tag}");
    }
}

#[test]
fn front_desk_denied_on_doctor_routes() {
    let storage = MemoryStorage::new();
    let mut store = authenticated_store(&storage, "Recepcionista");
    let decision = evaluate(route("/recetas"), "/recetas", &mut store, &storage);
    assert_eq!(decision, GuardDecision::RedirectHome);
}

// =============================================================================
// role_allowed
// =============================================================================

#[test]
fn role_allowed_none_set_is_open() {
    use crate::state::role::Role;
    assert!(role_allowed(route("/pacientes"), Some(&Role::Doctor)));
    assert!(role_allowed(route("/pacientes"), None));
}

#[test]
fn role_allowed_normalizes_both_sides() {
    use crate::state::role::Role;
    // Route lists the legacy tag only; a Recepcionista still passes.
    let legacy_only = routes::RouteDescriptor {
        path: "/prueba",
        name: "prueba",
        title: "Prueba",
        requires_auth: true,
        allowed_roles: Some(&[Role::User]),
    };
    assert!(role_allowed(&legacy_only, Some(&Role::Recepcionista)));
}
