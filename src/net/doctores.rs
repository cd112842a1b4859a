//! Doctors resource client (`/api/doctores`).

use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::net::http::{self, QueryParams};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Doctor {
    #[serde(rename = "Codigo")]
    pub codigo: i64,
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Apellidos")]
    pub apellidos: String,
    #[serde(rename = "Especialidad", default)]
    pub especialidad: Option<String>,
    #[serde(rename = "Direccion", default)]
    pub direccion: Option<String>,
    #[serde(rename = "Correo", default)]
    pub correo: Option<String>,
    #[serde(rename = "Genero", default)]
    pub genero: Option<String>,
    #[serde(rename = "Numero_Celular", default)]
    pub numero_celular: Option<i64>,
    #[serde(rename = "Numero_Colegiado", default)]
    pub numero_colegiado: Option<String>,
    #[serde(rename = "Fecha_Contratacion", default)]
    pub fecha_contratacion: Option<String>,
    #[serde(rename = "Estado", default)]
    pub estado: Option<String>,
    #[serde(rename = "Salario", default)]
    pub salario: Option<f64>,
    #[serde(rename = "Fecha_Creacion", default)]
    pub fecha_creacion: Option<String>,
    #[serde(rename = "Fecha_Modificacion", default)]
    pub fecha_modificacion: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct DoctorCreate {
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Apellidos")]
    pub apellidos: String,
    #[serde(rename = "Especialidad", skip_serializing_if = "Option::is_none")]
    pub especialidad: Option<String>,
    #[serde(rename = "Direccion", skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(rename = "Correo", skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    #[serde(rename = "Genero", skip_serializing_if = "Option::is_none")]
    pub genero: Option<String>,
    #[serde(rename = "Numero_Celular", skip_serializing_if = "Option::is_none")]
    pub numero_celular: Option<i64>,
    #[serde(rename = "Numero_Colegiado", skip_serializing_if = "Option::is_none")]
    pub numero_colegiado: Option<String>,
    #[serde(rename = "Fecha_Contratacion", skip_serializing_if = "Option::is_none")]
    pub fecha_contratacion: Option<String>,
    #[serde(rename = "Estado", skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(rename = "Salario", skip_serializing_if = "Option::is_none")]
    pub salario: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct DoctorUpdate {
    #[serde(rename = "Nombre", skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(rename = "Apellidos", skip_serializing_if = "Option::is_none")]
    pub apellidos: Option<String>,
    #[serde(rename = "Especialidad", skip_serializing_if = "Option::is_none")]
    pub especialidad: Option<String>,
    #[serde(rename = "Direccion", skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(rename = "Correo", skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    #[serde(rename = "Genero", skip_serializing_if = "Option::is_none")]
    pub genero: Option<String>,
    #[serde(rename = "Numero_Celular", skip_serializing_if = "Option::is_none")]
    pub numero_celular: Option<i64>,
    #[serde(rename = "Numero_Colegiado", skip_serializing_if = "Option::is_none")]
    pub numero_colegiado: Option<String>,
    #[serde(rename = "Fecha_Contratacion", skip_serializing_if = "Option::is_none")]
    pub fecha_contratacion: Option<String>,
    #[serde(rename = "Estado", skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(rename = "Salario", skip_serializing_if = "Option::is_none")]
    pub salario: Option<f64>,
}

pub async fn list() -> Result<Vec<Doctor>, ApiError> {
    http::get_json("/api/doctores", &QueryParams::new()).await
}

pub async fn get(codigo: i64) -> Result<Doctor, ApiError> {
    http::get_json(&format!("/api/doctores/{codigo}"), &QueryParams::new()).await
}

pub async fn create(data: &DoctorCreate) -> Result<Doctor, ApiError> {
    http::post_json("/api/doctores", data).await
}

pub async fn update(codigo: i64, data: &DoctorUpdate) -> Result<Doctor, ApiError> {
    http::put_json(&format!("/api/doctores/{codigo}"), data).await
}

pub async fn delete(codigo: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/doctores/{codigo}")).await
}
