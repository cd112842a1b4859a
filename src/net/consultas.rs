//! Consultations resource client (`/api/consultas`).

use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::net::http::{self, QueryParams};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Consultation {
    #[serde(rename = "Codigo")]
    pub codigo: i64,
    #[serde(rename = "Codigo_Paciente", default)]
    pub codigo_paciente: Option<i64>,
    #[serde(rename = "Codigo_Doctor", default)]
    pub codigo_doctor: Option<i64>,
    #[serde(rename = "Tipo_de_Consulta", default)]
    pub tipo_de_consulta: Option<String>,
    #[serde(rename = "Fecha_de_Consulta", default)]
    pub fecha_de_consulta: Option<String>,
    #[serde(rename = "Diagnostico", default)]
    pub diagnostico: Option<String>,
    #[serde(rename = "Estado", default)]
    pub estado: Option<String>,
    #[serde(rename = "Examenes_Solicitados", default)]
    pub examenes_solicitados: Option<bool>,
    #[serde(rename = "Examenes_Descripcion", default)]
    pub examenes_descripcion: Option<String>,
    #[serde(rename = "Examenes_Sugeridos", default)]
    pub examenes_sugeridos: Option<bool>,
    #[serde(rename = "Examenes_Sugeridos_Descripcion", default)]
    pub examenes_sugeridos_descripcion: Option<String>,
    #[serde(rename = "Fecha_Creacion", default)]
    pub fecha_creacion: Option<String>,
    #[serde(rename = "Fecha_Modificacion", default)]
    pub fecha_modificacion: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ConsultationCreate {
    #[serde(rename = "Codigo_Paciente", skip_serializing_if = "Option::is_none")]
    pub codigo_paciente: Option<i64>,
    #[serde(rename = "Codigo_Doctor", skip_serializing_if = "Option::is_none")]
    pub codigo_doctor: Option<i64>,
    #[serde(rename = "Tipo_de_Consulta", skip_serializing_if = "Option::is_none")]
    pub tipo_de_consulta: Option<String>,
    #[serde(rename = "Fecha_de_Consulta", skip_serializing_if = "Option::is_none")]
    pub fecha_de_consulta: Option<String>,
    #[serde(rename = "Diagnostico", skip_serializing_if = "Option::is_none")]
    pub diagnostico: Option<String>,
    #[serde(rename = "Estado", skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(rename = "Examenes_Solicitados", skip_serializing_if = "Option::is_none")]
    pub examenes_solicitados: Option<bool>,
    #[serde(rename = "Examenes_Descripcion", skip_serializing_if = "Option::is_none")]
    pub examenes_descripcion: Option<String>,
    #[serde(rename = "Examenes_Sugeridos", skip_serializing_if = "Option::is_none")]
    pub examenes_sugeridos: Option<bool>,
    #[serde(
        rename = "Examenes_Sugeridos_Descripcion",
        skip_serializing_if = "Option::is_none"
    )]
    pub examenes_sugeridos_descripcion: Option<String>,
}

/// Same optional shape as `ConsultationCreate`; every field is patchable.
pub type ConsultationUpdate = ConsultationCreate;

#[derive(Clone, Debug, Default)]
pub struct ConsultationFilters {
    pub codigo_paciente: Option<i64>,
    pub codigo_doctor: Option<i64>,
    pub estado: Option<String>,
}

impl ConsultationFilters {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("codigo_paciente", self.codigo_paciente);
        q.push_opt("codigo_doctor", self.codigo_doctor);
        q.push_opt("estado", self.estado.as_deref());
        q
    }
}

pub async fn list(filters: Option<&ConsultationFilters>) -> Result<Vec<Consultation>, ApiError> {
    let query = filters.map(ConsultationFilters::to_query).unwrap_or_default();
    http::get_json("/api/consultas", &query).await
}

pub async fn get(codigo: i64) -> Result<Consultation, ApiError> {
    http::get_json(&format!("/api/consultas/{codigo}"), &QueryParams::new()).await
}

pub async fn create(data: &ConsultationCreate) -> Result<Consultation, ApiError> {
    http::post_json("/api/consultas", data).await
}

pub async fn update(codigo: i64, data: &ConsultationUpdate) -> Result<Consultation, ApiError> {
    http::put_json(&format!("/api/consultas/{codigo}"), data).await
}

pub async fn delete(codigo: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/consultas/{codigo}")).await
}
