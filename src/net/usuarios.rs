//! System users resource client (`/api/usuarios`).

#[cfg(test)]
#[path = "usuarios_test.rs"]
mod usuarios_test;

use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::net::http::{self, QueryParams};

/// A system account. This is also the record the session store persists;
/// the backend's password column is never deserialized client-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemUser {
    #[serde(rename = "Codigo")]
    pub codigo: i64,
    #[serde(rename = "Usuario")]
    pub usuario: String,
    #[serde(rename = "Codigo_Doctor", default)]
    pub codigo_doctor: Option<i64>,
    #[serde(rename = "Rol", default)]
    pub rol: Option<String>,
    #[serde(rename = "Activo", default)]
    pub activo: Option<i64>,
    #[serde(rename = "Ultimo_Acceso", default)]
    pub ultimo_acceso: Option<String>,
    #[serde(rename = "Fecha_Creacion", default)]
    pub fecha_creacion: Option<String>,
    #[serde(rename = "Fecha_Modificacion", default)]
    pub fecha_modificacion: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SystemUserCreate {
    #[serde(rename = "Usuario")]
    pub usuario: String,
    #[serde(rename = "Contrasena")]
    pub contrasena: String,
    #[serde(rename = "Codigo_Doctor", skip_serializing_if = "Option::is_none")]
    pub codigo_doctor: Option<i64>,
    #[serde(rename = "Rol", skip_serializing_if = "Option::is_none")]
    pub rol: Option<String>,
    #[serde(rename = "Activo", skip_serializing_if = "Option::is_none")]
    pub activo: Option<i64>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct SystemUserUpdate {
    #[serde(rename = "Usuario", skip_serializing_if = "Option::is_none")]
    pub usuario: Option<String>,
    #[serde(rename = "Contrasena", skip_serializing_if = "Option::is_none")]
    pub contrasena: Option<String>,
    #[serde(rename = "Codigo_Doctor", skip_serializing_if = "Option::is_none")]
    pub codigo_doctor: Option<i64>,
    #[serde(rename = "Rol", skip_serializing_if = "Option::is_none")]
    pub rol: Option<String>,
    #[serde(rename = "Activo", skip_serializing_if = "Option::is_none")]
    pub activo: Option<i64>,
}

#[derive(Clone, Debug, Default)]
pub struct SystemUserFilters {
    pub rol: Option<String>,
    pub activo: Option<bool>,
}

impl SystemUserFilters {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("rol", self.rol.as_deref());
        q.push_opt("activo", self.activo);
        q
    }
}

pub async fn list(filters: Option<&SystemUserFilters>) -> Result<Vec<SystemUser>, ApiError> {
    let query = filters.map(SystemUserFilters::to_query).unwrap_or_default();
    http::get_json("/api/usuarios", &query).await
}

pub async fn get(codigo: i64) -> Result<SystemUser, ApiError> {
    http::get_json(&format!("/api/usuarios/{codigo}"), &QueryParams::new()).await
}

pub async fn create(data: &SystemUserCreate) -> Result<SystemUser, ApiError> {
    http::post_json("/api/usuarios", data).await
}

pub async fn update(codigo: i64, data: &SystemUserUpdate) -> Result<SystemUser, ApiError> {
    http::put_json(&format!("/api/usuarios/{codigo}"), data).await
}

pub async fn delete(codigo: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/usuarios/{codigo}")).await
}
