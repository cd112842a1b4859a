//! Exam-records resource client (`/api/examenes`).
//!
//! Exam reads can embed summary records of the appointment and consultation
//! they were requested from.

use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::net::http::{self, QueryParams};

/// Embedded appointment summary on an exam read.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AppointmentInfo {
    #[serde(rename = "Codigo")]
    pub codigo: i64,
    #[serde(rename = "Fecha_Hora", default)]
    pub fecha_hora: Option<String>,
    #[serde(rename = "Estado", default)]
    pub estado: Option<String>,
    #[serde(rename = "Motivo", default)]
    pub motivo: Option<String>,
}

/// Embedded consultation summary on an exam read.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ConsultationInfo {
    #[serde(rename = "Codigo")]
    pub codigo: i64,
    #[serde(rename = "Fecha_de_Consulta", default)]
    pub fecha_de_consulta: Option<String>,
    #[serde(rename = "Estado", default)]
    pub estado: Option<String>,
    #[serde(rename = "Tipo_de_Consulta", default)]
    pub tipo_de_consulta: Option<String>,
    #[serde(rename = "Diagnostico", default)]
    pub diagnostico: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Exam {
    #[serde(rename = "Codigo")]
    pub codigo: i64,
    #[serde(rename = "Codigo_Paciente")]
    pub codigo_paciente: i64,
    #[serde(rename = "Codigo_Doctor")]
    pub codigo_doctor: i64,
    #[serde(rename = "Codigo_Consulta", default)]
    pub codigo_consulta: Option<i64>,
    #[serde(rename = "Codigo_Cita", default)]
    pub codigo_cita: Option<i64>,
    #[serde(rename = "Tipo_Examen")]
    pub tipo_examen: String,
    #[serde(rename = "Fecha_Solicitud", default)]
    pub fecha_solicitud: Option<String>,
    #[serde(rename = "Fecha_Resultado", default)]
    pub fecha_resultado: Option<String>,
    #[serde(rename = "Resultado", default)]
    pub resultado: Option<String>,
    #[serde(rename = "Observaciones", default)]
    pub observaciones: Option<String>,
    #[serde(rename = "Estado", default)]
    pub estado: Option<String>,
    #[serde(rename = "Fecha_Creacion", default)]
    pub fecha_creacion: Option<String>,
    #[serde(rename = "Fecha_Modificacion", default)]
    pub fecha_modificacion: Option<String>,
    #[serde(rename = "Cita_Info", default)]
    pub cita_info: Option<AppointmentInfo>,
    #[serde(rename = "Consulta_Info", default)]
    pub consulta_info: Option<ConsultationInfo>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ExamCreate {
    #[serde(rename = "Codigo_Paciente")]
    pub codigo_paciente: i64,
    #[serde(rename = "Codigo_Doctor")]
    pub codigo_doctor: i64,
    #[serde(rename = "Codigo_Consulta", skip_serializing_if = "Option::is_none")]
    pub codigo_consulta: Option<i64>,
    #[serde(rename = "Codigo_Cita", skip_serializing_if = "Option::is_none")]
    pub codigo_cita: Option<i64>,
    #[serde(rename = "Tipo_Examen")]
    pub tipo_examen: String,
    #[serde(rename = "Fecha_Solicitud", skip_serializing_if = "Option::is_none")]
    pub fecha_solicitud: Option<String>,
    #[serde(rename = "Fecha_Resultado", skip_serializing_if = "Option::is_none")]
    pub fecha_resultado: Option<String>,
    #[serde(rename = "Resultado", skip_serializing_if = "Option::is_none")]
    pub resultado: Option<String>,
    #[serde(rename = "Observaciones", skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(rename = "Estado", skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ExamUpdate {
    #[serde(rename = "Codigo_Paciente", skip_serializing_if = "Option::is_none")]
    pub codigo_paciente: Option<i64>,
    #[serde(rename = "Codigo_Doctor", skip_serializing_if = "Option::is_none")]
    pub codigo_doctor: Option<i64>,
    #[serde(rename = "Codigo_Consulta", skip_serializing_if = "Option::is_none")]
    pub codigo_consulta: Option<i64>,
    #[serde(rename = "Codigo_Cita", skip_serializing_if = "Option::is_none")]
    pub codigo_cita: Option<i64>,
    #[serde(rename = "Tipo_Examen", skip_serializing_if = "Option::is_none")]
    pub tipo_examen: Option<String>,
    #[serde(rename = "Fecha_Solicitud", skip_serializing_if = "Option::is_none")]
    pub fecha_solicitud: Option<String>,
    #[serde(rename = "Fecha_Resultado", skip_serializing_if = "Option::is_none")]
    pub fecha_resultado: Option<String>,
    #[serde(rename = "Resultado", skip_serializing_if = "Option::is_none")]
    pub resultado: Option<String>,
    #[serde(rename = "Observaciones", skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(rename = "Estado", skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ExamFilters {
    pub codigo_paciente: Option<i64>,
    pub codigo_doctor: Option<i64>,
    pub codigo_consulta: Option<i64>,
    pub codigo_cita: Option<i64>,
    pub estado: Option<String>,
}

impl ExamFilters {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("codigo_paciente", self.codigo_paciente);
        q.push_opt("codigo_doctor", self.codigo_doctor);
        q.push_opt("codigo_consulta", self.codigo_consulta);
        q.push_opt("codigo_cita", self.codigo_cita);
        q.push_opt("estado", self.estado.as_deref());
        q
    }
}

pub async fn list(filters: Option<&ExamFilters>) -> Result<Vec<Exam>, ApiError> {
    let query = filters.map(ExamFilters::to_query).unwrap_or_default();
    http::get_json("/api/examenes", &query).await
}

pub async fn get(codigo: i64) -> Result<Exam, ApiError> {
    http::get_json(&format!("/api/examenes/{codigo}"), &QueryParams::new()).await
}

pub async fn create(data: &ExamCreate) -> Result<Exam, ApiError> {
    http::post_json("/api/examenes", data).await
}

pub async fn update(codigo: i64, data: &ExamUpdate) -> Result<Exam, ApiError> {
    http::put_json(&format!("/api/examenes/{codigo}"), data).await
}

pub async fn delete(codigo: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/examenes/{codigo}")).await
}
