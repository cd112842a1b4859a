//! Medical-history resource client (`/api/historial`).

use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::net::http::{self, QueryParams};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MedicalRecord {
    #[serde(rename = "Codigo_Historial")]
    pub codigo_historial: i64,
    #[serde(rename = "Codigo_Paciente", default)]
    pub codigo_paciente: Option<i64>,
    #[serde(rename = "Fecha_Ingreso", default)]
    pub fecha_ingreso: Option<String>,
    #[serde(rename = "Diagnostico", default)]
    pub diagnostico: Option<String>,
    #[serde(rename = "Tratamiento", default)]
    pub tratamiento: Option<String>,
    #[serde(rename = "Observaciones", default)]
    pub observaciones: Option<String>,
    #[serde(rename = "Fecha_Creacion", default)]
    pub fecha_creacion: Option<String>,
    #[serde(rename = "Fecha_Modificacion", default)]
    pub fecha_modificacion: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct MedicalRecordCreate {
    #[serde(rename = "Codigo_Paciente", skip_serializing_if = "Option::is_none")]
    pub codigo_paciente: Option<i64>,
    #[serde(rename = "Fecha_Ingreso", skip_serializing_if = "Option::is_none")]
    pub fecha_ingreso: Option<String>,
    #[serde(rename = "Diagnostico", skip_serializing_if = "Option::is_none")]
    pub diagnostico: Option<String>,
    #[serde(rename = "Tratamiento", skip_serializing_if = "Option::is_none")]
    pub tratamiento: Option<String>,
    #[serde(rename = "Observaciones", skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

/// Same optional shape as `MedicalRecordCreate`; every field is patchable.
pub type MedicalRecordUpdate = MedicalRecordCreate;

#[derive(Clone, Debug, Default)]
pub struct MedicalRecordFilters {
    pub codigo_paciente: Option<i64>,
}

impl MedicalRecordFilters {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("codigo_paciente", self.codigo_paciente);
        q
    }
}

pub async fn list(filters: Option<&MedicalRecordFilters>) -> Result<Vec<MedicalRecord>, ApiError> {
    let query = filters.map(MedicalRecordFilters::to_query).unwrap_or_default();
    http::get_json("/api/historial", &query).await
}

/// All history entries for one patient.
pub async fn list_for_patient(codigo_paciente: i64) -> Result<Vec<MedicalRecord>, ApiError> {
    http::get_json(
        &format!("/api/historial/paciente/{codigo_paciente}"),
        &QueryParams::new(),
    )
    .await
}

pub async fn get(codigo: i64) -> Result<MedicalRecord, ApiError> {
    http::get_json(&format!("/api/historial/{codigo}"), &QueryParams::new()).await
}

pub async fn create(data: &MedicalRecordCreate) -> Result<MedicalRecord, ApiError> {
    http::post_json("/api/historial", data).await
}

pub async fn update(codigo: i64, data: &MedicalRecordUpdate) -> Result<MedicalRecord, ApiError> {
    http::put_json(&format!("/api/historial/{codigo}"), data).await
}

pub async fn delete(codigo: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/historial/{codigo}")).await
}
