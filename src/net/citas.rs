//! Appointments resource client (`/api/citas`).

#[cfg(test)]
#[path = "citas_test.rs"]
mod citas_test;

use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::net::http::{self, QueryParams};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Appointment {
    #[serde(rename = "Codigo")]
    pub codigo: i64,
    #[serde(rename = "Codigo_Paciente")]
    pub codigo_paciente: i64,
    #[serde(rename = "Codigo_Doctor")]
    pub codigo_doctor: i64,
    #[serde(rename = "Fecha_Hora")]
    pub fecha_hora: String,
    #[serde(rename = "Estado", default)]
    pub estado: Option<String>,
    #[serde(rename = "Motivo", default)]
    pub motivo: Option<String>,
    #[serde(rename = "Observaciones", default)]
    pub observaciones: Option<String>,
    #[serde(rename = "Fecha_Creacion", default)]
    pub fecha_creacion: Option<String>,
    #[serde(rename = "Fecha_Modificacion", default)]
    pub fecha_modificacion: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AppointmentCreate {
    #[serde(rename = "Codigo_Paciente")]
    pub codigo_paciente: i64,
    #[serde(rename = "Codigo_Doctor")]
    pub codigo_doctor: i64,
    #[serde(rename = "Fecha_Hora")]
    pub fecha_hora: String,
    #[serde(rename = "Estado", skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(rename = "Motivo", skip_serializing_if = "Option::is_none")]
    pub motivo: Option<String>,
    #[serde(rename = "Observaciones", skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct AppointmentUpdate {
    #[serde(rename = "Codigo_Paciente", skip_serializing_if = "Option::is_none")]
    pub codigo_paciente: Option<i64>,
    #[serde(rename = "Codigo_Doctor", skip_serializing_if = "Option::is_none")]
    pub codigo_doctor: Option<i64>,
    #[serde(rename = "Fecha_Hora", skip_serializing_if = "Option::is_none")]
    pub fecha_hora: Option<String>,
    #[serde(rename = "Estado", skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(rename = "Motivo", skip_serializing_if = "Option::is_none")]
    pub motivo: Option<String>,
    #[serde(rename = "Observaciones", skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct AppointmentFilters {
    pub estado: Option<String>,
    pub codigo_doctor: Option<i64>,
    pub codigo_paciente: Option<i64>,
}

impl AppointmentFilters {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("estado", self.estado.as_deref());
        q.push_opt("codigo_doctor", self.codigo_doctor);
        q.push_opt("codigo_paciente", self.codigo_paciente);
        q
    }
}

pub async fn list(filters: Option<&AppointmentFilters>) -> Result<Vec<Appointment>, ApiError> {
    let query = filters.map(AppointmentFilters::to_query).unwrap_or_default();
    http::get_json("/api/citas", &query).await
}

pub async fn get(codigo: i64) -> Result<Appointment, ApiError> {
    http::get_json(&format!("/api/citas/{codigo}"), &QueryParams::new()).await
}

pub async fn create(data: &AppointmentCreate) -> Result<Appointment, ApiError> {
    http::post_json("/api/citas", data).await
}

pub async fn update(codigo: i64, data: &AppointmentUpdate) -> Result<Appointment, ApiError> {
    http::put_json(&format!("/api/citas/{codigo}"), data).await
}

pub async fn delete(codigo: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/citas/{codigo}")).await
}
