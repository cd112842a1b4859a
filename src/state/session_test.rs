use super::*;
use crate::net::auth::LoginResponse;
use crate::net::error::ApiError;
use crate::storage::MemoryStorage;
use async_trait::async_trait;
use futures::executor::block_on;

fn sample_user(rol: &str) -> SystemUser {
    SystemUser {
        codigo: 7,
        usuario: "mrodriguez".to_owned(),
        rol: Some(rol.to_owned()),
        activo: Some(1),
        ..SystemUser::default()
    }
}

/// Auth collaborator returning canned results.
struct StubAuth {
    login: Result<LoginResponse, ApiError>,
    logout: Result<(), ApiError>,
}

impl StubAuth {
    fn logging_in(result: Result<LoginResponse, ApiError>) -> Self {
        Self {
            login: result,
            logout: Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for StubAuth {
    async fn login(&self, _credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.login.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout.clone()
    }

    async fn current_user(&self) -> Result<SystemUser, ApiError> {
        Err(ApiError::Network("not stubbed".to_owned()))
    }
}

fn credentials() -> LoginRequest {
    LoginRequest {
        usuario: "mrodriguez".to_owned(),
        contrasena: "secreta".to_owned(),
    }
}

// =============================================================================
// Defaults and derived flags
// =============================================================================

#[test]
fn default_store_is_empty() {
    let store = SessionStore::default();
    assert!(store.user.is_none());
    assert!(store.token.is_none());
    assert!(!store.loading);
    assert!(store.error.is_none());
}

#[test]
fn default_store_not_authenticated() {
    assert!(!SessionStore::default().is_authenticated());
}

#[test]
fn user_without_token_not_authenticated() {
    let store = SessionStore {
        user: Some(sample_user("Admin")),
        ..SessionStore::default()
    };
    assert!(!store.is_authenticated());
}

#[test]
fn user_and_token_authenticated() {
    let store = SessionStore {
        user: Some(sample_user("Admin")),
        token: Some("tok".to_owned()),
        ..SessionStore::default()
    };
    assert!(store.is_authenticated());
}

#[test]
fn role_parses_user_tag() {
    let store = SessionStore {
        user: Some(sample_user("Doctor")),
        ..SessionStore::default()
    };
    assert_eq!(store.role(), Some(crate::state::role::Role::Doctor));
}

#[test]
fn role_none_without_user() {
    assert!(SessionStore::default().role().is_none());
}

// =============================================================================
// set_auth / clear write-through
// =============================================================================

#[test]
fn set_auth_persists_both_slots() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::default();
    store.set_auth(&storage, sample_user("Admin"), Some("tok".to_owned()));
    assert_eq!(storage.get(TOKEN_KEY), Some("tok".to_owned()));
    assert!(storage.get(USER_KEY).is_some());
}

#[test]
fn set_auth_without_token_persists_neither_slot() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "stale");
    storage.set(USER_KEY, "stale");
    let mut store = SessionStore::default();
    store.set_auth(&storage, sample_user("Admin"), None);
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
    assert!(store.user.is_some());
    assert!(!store.is_authenticated());
}

#[test]
fn clear_wipes_memory_and_storage() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::default();
    store.set_auth(&storage, sample_user("Admin"), Some("tok".to_owned()));
    store.clear(&storage);
    assert!(store.user.is_none());
    assert!(store.token.is_none());
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
}

#[test]
fn clear_twice_equals_clear_once() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::default();
    store.set_auth(&storage, sample_user("Admin"), Some("tok".to_owned()));
    store.clear(&storage);
    store.clear(&storage);
    assert!(store.user.is_none());
    assert!(storage.get(USER_KEY).is_none());
}

// =============================================================================
// init_from_storage
// =============================================================================

#[test]
fn init_with_empty_storage_leaves_state_unchanged() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::default();
    store.init_from_storage(&storage);
    assert!(store.user.is_none());
    assert!(store.token.is_none());
}

#[test]
fn init_with_only_token_adopts_nothing() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "tok");
    let mut store = SessionStore::default();
    store.init_from_storage(&storage);
    assert!(!store.is_authenticated());
}

#[test]
fn init_recovers_persisted_session() {
    let storage = MemoryStorage::new();
    let mut writer = SessionStore::default();
    writer.set_auth(&storage, sample_user("Doctor"), Some("tok".to_owned()));

    let mut reloaded = SessionStore::default();
    reloaded.init_from_storage(&storage);
    assert!(reloaded.is_authenticated());
    assert_eq!(reloaded.role(), writer.role());
}

#[test]
fn init_with_corrupt_user_clears_session() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "tok");
    storage.set(USER_KEY, "{not json");
    let mut store = SessionStore::default();
    store.init_from_storage(&storage);
    assert!(store.user.is_none());
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
}

#[test]
fn init_is_idempotent() {
    let storage = MemoryStorage::new();
    let mut writer = SessionStore::default();
    writer.set_auth(&storage, sample_user("Admin"), Some("tok".to_owned()));

    let mut store = SessionStore::default();
    store.init_from_storage(&storage);
    let first = store.clone();
    store.init_from_storage(&storage);
    assert_eq!(store.user, first.user);
    assert_eq!(store.token, first.token);
}

// =============================================================================
// check_authenticated
// =============================================================================

#[test]
fn check_reads_through_when_memory_empty() {
    let storage = MemoryStorage::new();
    let mut writer = SessionStore::default();
    writer.set_auth(&storage, sample_user("Admin"), Some("tok".to_owned()));

    let mut store = SessionStore::default();
    assert!(store.check_authenticated(&storage));
    assert!(store.is_authenticated());
}

#[test]
fn check_false_with_nothing_persisted() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::default();
    assert!(!store.check_authenticated(&storage));
}

#[test]
fn check_with_corrupt_user_returns_false_and_heals() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "tok");
    storage.set(USER_KEY, "not even json");
    let mut store = SessionStore::default();
    assert!(!store.check_authenticated(&storage));
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
}

// =============================================================================
// login
// =============================================================================

fn login_success(rol: &str) -> Result<LoginResponse, ApiError> {
    Ok(LoginResponse {
        usuario: sample_user(rol),
        token: Some("servertok".to_owned()),
    })
}

#[test]
fn login_success_stores_user_and_token() {
    let storage = MemoryStorage::new();
    let api = StubAuth::logging_in(login_success("Admin"));
    let mut store = SessionStore::default();

    let result = block_on(store.login(&api, &storage, credentials()));
    assert!(result.is_ok());
    assert!(store.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), Some("servertok".to_owned()));
    assert!(storage.get(USER_KEY).is_some());
}

#[test]
fn login_clears_loading_on_success() {
    let storage = MemoryStorage::new();
    let api = StubAuth::logging_in(login_success("Admin"));
    let mut store = SessionStore::default();
    let _ = block_on(store.login(&api, &storage, credentials()));
    assert!(!store.loading);
}

#[test]
fn login_failure_reports_detail_message() {
    let storage = MemoryStorage::new();
    let api = StubAuth::logging_in(Err(ApiError::Status {
        status: 401,
        body: r#"{"detail":"Credenciales inválidas"}"#.to_owned(),
    }));
    let mut store = SessionStore::default();

    let result = block_on(store.login(&api, &storage, credentials()));
    assert_eq!(result, Err("Credenciales inválidas".to_owned()));
    assert_eq!(store.error.as_deref(), Some("Credenciales inválidas"));
}

#[test]
fn login_failure_leaves_prior_state_untouched() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::default();
    store.set_auth(&storage, sample_user("Doctor"), Some("old".to_owned()));

    let api = StubAuth::logging_in(Err(ApiError::Network("offline".to_owned())));
    let result = block_on(store.login(&api, &storage, credentials()));
    assert!(result.is_err());
    assert_eq!(store.token.as_deref(), Some("old"));
    assert_eq!(storage.get(TOKEN_KEY), Some("old".to_owned()));
}

#[test]
fn login_clears_loading_on_failure() {
    let storage = MemoryStorage::new();
    let api = StubAuth::logging_in(Err(ApiError::Timeout));
    let mut store = SessionStore::default();
    let _ = block_on(store.login(&api, &storage, credentials()));
    assert!(!store.loading);
}

// =============================================================================
// logout
// =============================================================================

#[test]
fn logout_clears_session() {
    let storage = MemoryStorage::new();
    let api = StubAuth {
        login: Err(ApiError::Network("unused".to_owned())),
        logout: Ok(()),
    };
    let mut store = SessionStore::default();
    store.set_auth(&storage, sample_user("Admin"), Some("tok".to_owned()));

    block_on(store.logout(&api, &storage));
    assert!(!store.is_authenticated());
    assert!(storage.get(TOKEN_KEY).is_none());
}

#[test]
fn logout_clears_session_even_when_request_fails() {
    let storage = MemoryStorage::new();
    let api = StubAuth {
        login: Err(ApiError::Network("unused".to_owned())),
        logout: Err(ApiError::Network("offline".to_owned())),
    };
    let mut store = SessionStore::default();
    store.set_auth(&storage, sample_user("Admin"), Some("tok".to_owned()));

    block_on(store.logout(&api, &storage));
    assert!(!store.is_authenticated());
    assert!(storage.get(USER_KEY).is_none());
}

// =============================================================================
// Round-trip: login then reload
// =============================================================================

#[test]
fn login_then_reload_reproduces_role() {
    let storage = MemoryStorage::new();
    let api = StubAuth::logging_in(login_success("Recepcionista"));
    let mut store = SessionStore::default();
    let _ = block_on(store.login(&api, &storage, credentials()));

    // Page-reload equivalent: a fresh store over the same storage.
    let mut reloaded = SessionStore::default();
    reloaded.init_from_storage(&storage);
    assert!(reloaded.is_authenticated());
    assert_eq!(
        reloaded.role(),
        Some(crate::state::role::Role::Recepcionista)
    );
}
