//! Shared request pipeline.
//!
//! ARCHITECTURE
//! ============
//! Every resource-client call goes through the verbs here, which apply the
//! cross-cutting behaviors: base URL resolution, a fixed 10-second timeout,
//! bearer-token injection from persisted storage, and 401 interception.
//!
//! A 401 is a global signal, not a per-call error: the persisted session is
//! purged and the app shell is notified over the session-expired channel so
//! it can navigate to the login view. When no subscriber is registered the
//! pipeline falls back to a hard location change, skipped if the login view
//! is already showing. Either way the caller still sees the original
//! `ApiError::Status`, undisturbed.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::cell::RefCell;

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::router::routes::LOGIN_PATH;
use crate::storage::{SessionPersistence, TOKEN_KEY, USER_KEY};

/// Backend origin, fixed at build time. Mirrors the original deployment's
/// environment-provided base URL with a local-development fallback.
pub const BASE_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[cfg(not(feature = "hydrate"))]
const OFFLINE: &str = "not available on the server";

// =============================================================================
// Query strings
// =============================================================================

/// Query-string builder that omits absent values entirely.
#[derive(Clone, Debug, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl std::fmt::Display) {
        self.pairs.push((key.to_owned(), value.to_string()));
    }

    /// Append the pair only when a value is present; `None` is omitted, not
    /// sent empty.
    pub fn push_opt(&mut self, key: &str, value: Option<impl std::fmt::Display>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as `?a=b&c=d`, or an empty string when no pairs were pushed.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let encoded: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("?{}", encoded.join("&"))
    }
}

fn build_url(path: &str, query: &QueryParams) -> String {
    format!("{BASE_URL}{path}{}", query.to_query_string())
}

// =============================================================================
// Session-expired signal
// =============================================================================

/// What the 401 interceptor did besides purging the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnauthorizedOutcome {
    /// A shell subscriber was notified; it owns the navigation.
    Notified,
    /// No subscriber: the caller must force a hard navigation to login.
    HardRedirect,
    /// No subscriber, but the login view is already showing.
    AlreadyAtLogin,
}

thread_local! {
    static SESSION_EXPIRED_TX: RefCell<Option<UnboundedSender<()>>> = const { RefCell::new(None) };
}

/// Register the app shell as the session-expired subscriber.
///
/// Replaces any previous subscriber; the returned receiver yields one unit
/// per intercepted 401.
pub fn subscribe_session_expired() -> UnboundedReceiver<()> {
    let (tx, rx) = unbounded();
    SESSION_EXPIRED_TX.with(|cell| *cell.borrow_mut() = Some(tx));
    rx
}

fn notify_session_expired() -> bool {
    SESSION_EXPIRED_TX.with(|cell| {
        let mut slot = cell.borrow_mut();
        match slot.as_ref() {
            Some(tx) if tx.unbounded_send(()).is_ok() => true,
            Some(_) => {
                // Receiver dropped; forget the dead sender.
                *slot = None;
                false
            }
            None => false,
        }
    })
}

/// Purge the persisted session after a 401 and decide how to reach login.
pub fn handle_unauthorized(
    storage: &dyn SessionPersistence,
    current_path: &str,
) -> UnauthorizedOutcome {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
    if notify_session_expired() {
        UnauthorizedOutcome::Notified
    } else if current_path == LOGIN_PATH {
        UnauthorizedOutcome::AlreadyAtLogin
    } else {
        UnauthorizedOutcome::HardRedirect
    }
}

// =============================================================================
// Browser request plumbing
// =============================================================================

#[cfg(feature = "hydrate")]
fn authorize(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::storage::BrowserStorage.get(TOKEN_KEY) {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Send a built request, racing it against the fixed timeout.
#[cfg(feature = "hydrate")]
async fn send_with_timeout(
    request: gloo_net::http::Request,
) -> Result<gloo_net::http::Response, ApiError> {
    use futures::future::{Either, select};

    let url = request.url();
    let fetch = Box::pin(async move {
        request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    });
    let timeout = Box::pin(gloo_timers::future::sleep(std::time::Duration::from_millis(
        u64::from(REQUEST_TIMEOUT_MS),
    )));

    let outcome = match select(fetch, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    };
    if let Err(err) = &outcome {
        log::error!("API request failed: url={url} err={err}");
    }
    outcome
}

/// Map a non-success response to `ApiError`, intercepting 401.
#[cfg(feature = "hydrate")]
async fn check_response(
    response: gloo_net::http::Response,
    url: &str,
) -> Result<gloo_net::http::Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status == 401 {
        let outcome = handle_unauthorized(&crate::storage::BrowserStorage, &current_pathname());
        if outcome == UnauthorizedOutcome::HardRedirect {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(LOGIN_PATH);
            }
        }
    }

    log::error!("API error: status={status} url={url} body={body}");
    Err(ApiError::Status { status, body })
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// Verbs
// =============================================================================

/// GET a JSON resource.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &QueryParams,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = build_url(path, query);
        let request = authorize(gloo_net::http::Request::get(&url))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_response(send_with_timeout(request).await?, &url).await?;
        decode(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, query);
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// POST a JSON payload, decoding a JSON response.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = build_url(path, &QueryParams::new());
        let request = authorize(gloo_net::http::Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_response(send_with_timeout(request).await?, &url).await?;
        decode(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// POST with no payload, ignoring any response body.
pub async fn post_empty(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = build_url(path, &QueryParams::new());
        let request = authorize(gloo_net::http::Request::post(&url))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_response(send_with_timeout(request).await?, &url).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// PUT a JSON payload, decoding a JSON response.
pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = build_url(path, &QueryParams::new());
        let request = authorize(gloo_net::http::Request::put(&url))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_response(send_with_timeout(request).await?, &url).await?;
        decode(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// DELETE a resource, ignoring any response body.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = build_url(path, &QueryParams::new());
        let request = authorize(gloo_net::http::Request::delete(&url))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_response(send_with_timeout(request).await?, &url).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}
