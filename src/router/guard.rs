//! Per-navigation guard.
//!
//! ARCHITECTURE
//! ============
//! The guard runs once per navigation and maps to exactly one decision:
//! proceed, redirect to login (carrying the intended path for a post-login
//! return), or redirect home (silent role denial — there is no forbidden
//! page in this design). The shell applies the decision; it never proceeds
//! and redirects for the same evaluation.
//!
//! Evaluation is synchronous: the authentication re-check is a persistence
//! read-through, so a guard run has no suspension point and a superseded
//! navigation can never mutate session state late. The HTTP layer's 401
//! handler may clear persistence between navigations; each evaluation
//! re-reads it, so that external clearing is picked up on the next run.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::router::routes::{LOGIN_PATH, RouteDescriptor};
use crate::state::role::Role;
use crate::state::session::SessionStore;
use crate::storage::SessionPersistence;

/// Outcome of one guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    /// Send to login, preserving the originally intended full path.
    RedirectLogin { redirect: String },
    RedirectHome,
}

/// Whether a role may enter a route. Both sides of the comparison go
/// through the access-class mapping, so the legacy `User` tag passes routes
/// that list `Recepcionista` and vice versa.
#[must_use]
pub fn role_allowed(route: &RouteDescriptor, role: Option<&Role>) -> bool {
    let Some(allowed) = route.allowed_roles else {
        return true;
    };
    let Some(role) = role else {
        return false;
    };
    let class = role.access_class();
    allowed.iter().any(|candidate| candidate.access_class() == class)
}

/// Decide whether a navigation to `route` may proceed.
///
/// `full_path` is the intended destination including any query string; it
/// becomes the post-login redirect target when authentication is missing.
pub fn evaluate(
    route: &RouteDescriptor,
    full_path: &str,
    session: &mut SessionStore,
    storage: &dyn SessionPersistence,
) -> GuardDecision {
    // Best-effort recovery across a full page reload.
    if session.user.is_none() {
        session.init_from_storage(storage);
    }

    if route.requires_auth
        && !session.is_authenticated()
        && !session.check_authenticated(storage)
    {
        return GuardDecision::RedirectLogin {
            redirect: full_path.to_owned(),
        };
    }

    // An authenticated user has no business on the login view.
    if route.path == LOGIN_PATH && session.is_authenticated() {
        return GuardDecision::RedirectHome;
    }

    if route.requires_auth && !role_allowed(route, session.role().as_ref()) {
        return GuardDecision::RedirectHome;
    }

    GuardDecision::Proceed
}
