//! Prescriptions resource client (`/api/recetas`).

use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::net::http::{self, QueryParams};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Prescription {
    #[serde(rename = "Codigo")]
    pub codigo: i64,
    #[serde(rename = "Codigo_Paciente", default)]
    pub codigo_paciente: Option<i64>,
    #[serde(rename = "Codigo_Doctor", default)]
    pub codigo_doctor: Option<i64>,
    #[serde(rename = "Codigo_Consulta", default)]
    pub codigo_consulta: Option<i64>,
    #[serde(rename = "Nombre_Paciente", default)]
    pub nombre_paciente: Option<String>,
    #[serde(rename = "Fecha_Receta", default)]
    pub fecha_receta: Option<String>,
    #[serde(rename = "Medicamento", default)]
    pub medicamento: Option<String>,
    #[serde(rename = "Instrucciones", default)]
    pub instrucciones: Option<String>,
    #[serde(rename = "Fecha_Creacion", default)]
    pub fecha_creacion: Option<String>,
    #[serde(rename = "Fecha_Modificacion", default)]
    pub fecha_modificacion: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct PrescriptionCreate {
    #[serde(rename = "Codigo_Paciente", skip_serializing_if = "Option::is_none")]
    pub codigo_paciente: Option<i64>,
    #[serde(rename = "Codigo_Doctor", skip_serializing_if = "Option::is_none")]
    pub codigo_doctor: Option<i64>,
    #[serde(rename = "Codigo_Consulta", skip_serializing_if = "Option::is_none")]
    pub codigo_consulta: Option<i64>,
    #[serde(rename = "Nombre_Paciente", skip_serializing_if = "Option::is_none")]
    pub nombre_paciente: Option<String>,
    #[serde(rename = "Fecha_Receta", skip_serializing_if = "Option::is_none")]
    pub fecha_receta: Option<String>,
    #[serde(rename = "Medicamento", skip_serializing_if = "Option::is_none")]
    pub medicamento: Option<String>,
    #[serde(rename = "Instrucciones", skip_serializing_if = "Option::is_none")]
    pub instrucciones: Option<String>,
}

/// Same optional shape as `PrescriptionCreate`; every field is patchable.
pub type PrescriptionUpdate = PrescriptionCreate;

#[derive(Clone, Debug, Default)]
pub struct PrescriptionFilters {
    pub codigo_paciente: Option<i64>,
    pub codigo_doctor: Option<i64>,
}

impl PrescriptionFilters {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("codigo_paciente", self.codigo_paciente);
        q.push_opt("codigo_doctor", self.codigo_doctor);
        q
    }
}

pub async fn list(filters: Option<&PrescriptionFilters>) -> Result<Vec<Prescription>, ApiError> {
    let query = filters.map(PrescriptionFilters::to_query).unwrap_or_default();
    http::get_json("/api/recetas", &query).await
}

pub async fn get(codigo: i64) -> Result<Prescription, ApiError> {
    http::get_json(&format!("/api/recetas/{codigo}"), &QueryParams::new()).await
}

pub async fn create(data: &PrescriptionCreate) -> Result<Prescription, ApiError> {
    http::post_json("/api/recetas", data).await
}

pub async fn update(codigo: i64, data: &PrescriptionUpdate) -> Result<Prescription, ApiError> {
    http::put_json(&format!("/api/recetas/{codigo}"), data).await
}

pub async fn delete(codigo: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/recetas/{codigo}")).await
}
