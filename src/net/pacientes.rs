//! Patients resource client (`/api/pacientes`).

use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::net::http::{self, QueryParams};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Patient {
    #[serde(rename = "Codigo")]
    pub codigo: i64,
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Apellidos")]
    pub apellidos: String,
    #[serde(rename = "Edad", default)]
    pub edad: Option<String>,
    #[serde(rename = "Direccion", default)]
    pub direccion: Option<String>,
    #[serde(rename = "Numero_Celular", default)]
    pub numero_celular: Option<i64>,
    #[serde(rename = "Fecha_Nacimiento", default)]
    pub fecha_nacimiento: Option<String>,
    #[serde(rename = "Tipo_Sangre", default)]
    pub tipo_sangre: Option<String>,
    #[serde(rename = "Alergias", default)]
    pub alergias: Option<String>,
    #[serde(rename = "Contacto_Emergencia", default)]
    pub contacto_emergencia: Option<String>,
    #[serde(rename = "Telefono_Emergencia", default)]
    pub telefono_emergencia: Option<i64>,
    #[serde(rename = "Codigo_Seguro", default)]
    pub codigo_seguro: Option<i64>,
    #[serde(rename = "Fecha_Creacion", default)]
    pub fecha_creacion: Option<String>,
    #[serde(rename = "Fecha_Modificacion", default)]
    pub fecha_modificacion: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PatientCreate {
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Apellidos")]
    pub apellidos: String,
    #[serde(rename = "Edad", skip_serializing_if = "Option::is_none")]
    pub edad: Option<String>,
    #[serde(rename = "Direccion", skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(rename = "Numero_Celular", skip_serializing_if = "Option::is_none")]
    pub numero_celular: Option<i64>,
    #[serde(rename = "Fecha_Nacimiento", skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<String>,
    #[serde(rename = "Tipo_Sangre", skip_serializing_if = "Option::is_none")]
    pub tipo_sangre: Option<String>,
    #[serde(rename = "Alergias", skip_serializing_if = "Option::is_none")]
    pub alergias: Option<String>,
    #[serde(rename = "Contacto_Emergencia", skip_serializing_if = "Option::is_none")]
    pub contacto_emergencia: Option<String>,
    #[serde(rename = "Telefono_Emergencia", skip_serializing_if = "Option::is_none")]
    pub telefono_emergencia: Option<i64>,
    #[serde(rename = "Codigo_Seguro", skip_serializing_if = "Option::is_none")]
    pub codigo_seguro: Option<i64>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct PatientUpdate {
    #[serde(rename = "Nombre", skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(rename = "Apellidos", skip_serializing_if = "Option::is_none")]
    pub apellidos: Option<String>,
    #[serde(rename = "Edad", skip_serializing_if = "Option::is_none")]
    pub edad: Option<String>,
    #[serde(rename = "Direccion", skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(rename = "Numero_Celular", skip_serializing_if = "Option::is_none")]
    pub numero_celular: Option<i64>,
    #[serde(rename = "Fecha_Nacimiento", skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<String>,
    #[serde(rename = "Tipo_Sangre", skip_serializing_if = "Option::is_none")]
    pub tipo_sangre: Option<String>,
    #[serde(rename = "Alergias", skip_serializing_if = "Option::is_none")]
    pub alergias: Option<String>,
    #[serde(rename = "Contacto_Emergencia", skip_serializing_if = "Option::is_none")]
    pub contacto_emergencia: Option<String>,
    #[serde(rename = "Telefono_Emergencia", skip_serializing_if = "Option::is_none")]
    pub telefono_emergencia: Option<i64>,
    #[serde(rename = "Codigo_Seguro", skip_serializing_if = "Option::is_none")]
    pub codigo_seguro: Option<i64>,
}

pub async fn list() -> Result<Vec<Patient>, ApiError> {
    http::get_json("/api/pacientes", &QueryParams::new()).await
}

pub async fn get(codigo: i64) -> Result<Patient, ApiError> {
    http::get_json(&format!("/api/pacientes/{codigo}"), &QueryParams::new()).await
}

pub async fn create(data: &PatientCreate) -> Result<Patient, ApiError> {
    http::post_json("/api/pacientes", data).await
}

pub async fn update(codigo: i64, data: &PatientUpdate) -> Result<Patient, ApiError> {
    http::put_json(&format!("/api/pacientes/{codigo}"), data).await
}

pub async fn delete(codigo: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/pacientes/{codigo}")).await
}
