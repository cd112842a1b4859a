//! Process-wide session state.
//!
//! DESIGN
//! ======
//! The store is a plain struct; the app layer wraps it in an `RwSignal`.
//! Every mutating operation takes the persistence handle explicitly and
//! writes through in the same step, so memory and localStorage never
//! disagree from the perspective of the next read. The token slot is only
//! ever persisted together with the user slot: both keys are written or
//! both are absent.
//!
//! ERROR HANDLING
//! ==============
//! A stored user record that no longer parses is treated as "no session":
//! the store clears itself and never raises. Collaborator failures during
//! `login` are translated into a human-readable message; during `logout`
//! they are logged and otherwise ignored.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::auth::{AuthApi, LoginRequest};
use crate::net::error::login_error_message;
use crate::net::usuarios::SystemUser;
use crate::state::role::Role;
use crate::storage::{SessionPersistence, TOKEN_KEY, USER_KEY};

/// Authentication state: current user, token, and transient login status.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    pub user: Option<SystemUser>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionStore {
    /// Whether a valid session exists (user and token both present).
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// The current user's parsed role, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user
            .as_ref()
            .and_then(|u| u.rol.as_deref())
            .map(Role::parse)
    }

    /// Recover a session persisted by a previous page load.
    ///
    /// Adopts the stored token and user only when both slots are present and
    /// the user record parses; a corrupt record clears the session instead
    /// of erroring. Idempotent: with nothing stored, state is untouched.
    pub fn init_from_storage(&mut self, storage: &dyn SessionPersistence) {
        let (Some(token), Some(raw_user)) = (storage.get(TOKEN_KEY), storage.get(USER_KEY)) else {
            return;
        };
        match serde_json::from_str::<SystemUser>(&raw_user) {
            Ok(user) => {
                self.user = Some(user);
                self.token = Some(token);
            }
            Err(err) => {
                log::warn!("stored session user is unreadable, clearing session: {err}");
                self.clear(storage);
            }
        }
    }

    /// Whether a valid session exists, reading through to persistence when
    /// memory is empty. Self-heals on a corrupt stored record.
    pub fn check_authenticated(&mut self, storage: &dyn SessionPersistence) -> bool {
        if self.is_authenticated() {
            return true;
        }
        self.init_from_storage(storage);
        self.is_authenticated()
    }

    /// Adopt a user and optional token, mirroring both to persistence.
    ///
    /// Without a token there is no valid session to recover later, so
    /// neither slot is persisted (both keys written or both absent).
    pub fn set_auth(
        &mut self,
        storage: &dyn SessionPersistence,
        user: SystemUser,
        token: Option<String>,
    ) {
        match (&token, serde_json::to_string(&user)) {
            (Some(tok), Ok(json)) => {
                storage.set(TOKEN_KEY, tok);
                storage.set(USER_KEY, &json);
            }
            (_, serialized) => {
                if let Err(err) = serialized {
                    log::warn!("session user could not be serialized: {err}");
                }
                storage.remove(TOKEN_KEY);
                storage.remove(USER_KEY);
            }
        }
        self.user = Some(user);
        self.token = token;
        self.error = None;
    }

    /// Authenticate against the backend.
    ///
    /// On success the returned user and token are stored in memory and
    /// persistence atomically. On failure the previous state is untouched
    /// and the returned message is extracted from the error payload. The
    /// `loading` flag is cleared on every exit path.
    pub async fn login(
        &mut self,
        api: &dyn AuthApi,
        storage: &dyn SessionPersistence,
        credentials: LoginRequest,
    ) -> Result<(), String> {
        self.loading = true;
        self.error = None;
        let result = api.login(&credentials).await;
        self.loading = false;
        match result {
            Ok(response) => {
                self.set_auth(storage, response.usuario, response.token);
                Ok(())
            }
            Err(err) => {
                let message = login_error_message(&err);
                self.error = Some(message.clone());
                Err(message)
            }
        }
    }

    /// End the session.
    ///
    /// The backend call is best-effort: a failure is logged, never
    /// propagated. Local and persisted state are always cleared as the
    /// final step.
    pub async fn logout(&mut self, api: &dyn AuthApi, storage: &dyn SessionPersistence) {
        if let Err(err) = api.logout().await {
            log::warn!("logout request failed: {err}");
        }
        self.clear(storage);
    }

    /// Unconditionally wipe the in-memory and persisted session. Idempotent.
    pub fn clear(&mut self, storage: &dyn SessionPersistence) {
        self.user = None;
        self.token = None;
        self.error = None;
        storage.remove(TOKEN_KEY);
        storage.remove(USER_KEY);
    }
}
