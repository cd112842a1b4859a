//! Authentication collaborator.
//!
//! The session store talks to the backend through the `AuthApi` trait so
//! tests can substitute a stub; `HttpAuthApi` is the real implementation
//! over `/api/auth/*`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::usuarios::SystemUser;

/// Credentials submitted by the login form.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    #[serde(rename = "Usuario")]
    pub usuario: String,
    #[serde(rename = "Contrasena")]
    pub contrasena: String,
}

/// Successful login payload. The token is optional on the wire; without it
/// the session is not considered authenticated.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub usuario: SystemUser,
    #[serde(default)]
    pub token: Option<String>,
}

/// Backend authentication operations.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn current_user(&self) -> Result<SystemUser, ApiError>;
}

/// `AuthApi` over the shared request pipeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        http::post_json("/api/auth/login", credentials).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        http::post_empty("/api/auth/logout").await
    }

    async fn current_user(&self) -> Result<SystemUser, ApiError> {
        http::get_json("/api/auth/me", &http::QueryParams::new()).await
    }
}
