use super::*;
use std::collections::HashSet;

// =============================================================================
// Table invariants
// =============================================================================

#[test]
fn paths_are_unique() {
    let mut seen = HashSet::new();
    for route in TABLE {
        assert!(seen.insert(route.path), "duplicate path {}", route.path);
    }
}

#[test]
fn names_are_unique() {
    let mut seen = HashSet::new();
    for route in TABLE {
        assert!(seen.insert(route.name), "duplicate name {}", route.name);
    }
}

#[test]
fn only_login_skips_auth() {
    for route in TABLE {
        assert_eq!(route.requires_auth, route.path != LOGIN_PATH);
    }
}

#[test]
fn every_path_resolves_to_itself() {
    for route in TABLE {
        let found = find(route.path).expect("route must resolve");
        assert_eq!(found.path, route.path);
    }
}

// =============================================================================
// find
// =============================================================================

#[test]
fn find_home() {
    assert_eq!(find("/").map(|r| r.name), Some("home"));
}

#[test]
fn find_ignores_trailing_slash() {
    assert_eq!(find("/pacientes/").map(|r| r.name), Some("pacientes"));
}

#[test]
fn find_empty_path_is_home() {
    assert_eq!(find("").map(|r| r.name), Some("home"));
}

#[test]
fn find_unknown_path_is_none() {
    assert!(find("/inventario").is_none());
}

// =============================================================================
// page_title
// =============================================================================

#[test]
fn page_title_uses_route_title() {
    let route = find("/citas");
    assert_eq!(page_title(route), "Citas - Centro Médico");
}

#[test]
fn page_title_defaults_for_unknown_route() {
    assert_eq!(page_title(None), "Sistema - Centro Médico");
}
