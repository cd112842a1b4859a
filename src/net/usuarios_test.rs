use super::*;

// =============================================================================
// SystemUser wire format
// =============================================================================

#[test]
fn deserializes_backend_field_names() {
    let json = r#"{
        "Codigo": 4,
        "Usuario": "admin",
        "Rol": "Admin",
        "Activo": 1,
        "Codigo_Doctor": null
    }"#;
    let user: SystemUser = serde_json::from_str(json).unwrap();
    assert_eq!(user.codigo, 4);
    assert_eq!(user.usuario, "admin");
    assert_eq!(user.rol.as_deref(), Some("Admin"));
    assert_eq!(user.activo, Some(1));
    assert!(user.codigo_doctor.is_none());
}

#[test]
fn password_field_is_never_retained() {
    let json = r#"{"Codigo": 1, "Usuario": "admin", "Contrasena": "secreta"}"#;
    let user: SystemUser = serde_json::from_str(json).unwrap();
    let stored = serde_json::to_string(&user).unwrap();
    assert!(!stored.contains("secreta"));
    assert!(!stored.contains("Contrasena"));
}

#[test]
fn serialization_round_trips() {
    let user = SystemUser {
        codigo: 9,
        usuario: "jlopez".to_owned(),
        rol: Some("Doctor".to_owned()),
        codigo_doctor: Some(3),
        ..SystemUser::default()
    };
    let json = serde_json::to_string(&user).unwrap();
    let back: SystemUser = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn missing_optional_fields_default_to_none() {
    let user: SystemUser = serde_json::from_str(r#"{"Codigo": 2, "Usuario": "x"}"#).unwrap();
    assert!(user.rol.is_none());
    assert!(user.ultimo_acceso.is_none());
}

// =============================================================================
// SystemUserUpdate partial payloads
// =============================================================================

#[test]
fn update_skips_absent_fields() {
    let update = SystemUserUpdate {
        rol: Some("Admin".to_owned()),
        ..SystemUserUpdate::default()
    };
    assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"Rol":"Admin"}"#);
}

#[test]
fn empty_update_serializes_to_empty_object() {
    assert_eq!(
        serde_json::to_string(&SystemUserUpdate::default()).unwrap(),
        "{}"
    );
}

// =============================================================================
// SystemUserFilters
// =============================================================================

#[test]
fn filters_encode_present_values_only() {
    let filters = SystemUserFilters {
        rol: Some("Doctor".to_owned()),
        activo: None,
    };
    assert_eq!(filters.to_query().to_query_string(), "?rol=Doctor");
}

#[test]
fn filters_include_false_activo() {
    let filters = SystemUserFilters {
        rol: None,
        activo: Some(false),
    };
    assert_eq!(filters.to_query().to_query_string(), "?activo=false");
}
