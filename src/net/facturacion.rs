//! Billing resource client (`/api/facturacion`).

use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::net::http::{self, QueryParams};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Invoice {
    #[serde(rename = "Codigo")]
    pub codigo: i64,
    #[serde(rename = "Codigo_Paciente")]
    pub codigo_paciente: i64,
    #[serde(rename = "Codigo_Consulta", default)]
    pub codigo_consulta: Option<i64>,
    #[serde(rename = "Monto")]
    pub monto: f64,
    #[serde(rename = "Metodo_Pago", default)]
    pub metodo_pago: Option<String>,
    #[serde(rename = "Estado_Pago", default)]
    pub estado_pago: Option<String>,
    #[serde(rename = "Numero_Factura", default)]
    pub numero_factura: Option<String>,
    #[serde(rename = "Fecha_Factura", default)]
    pub fecha_factura: Option<String>,
    #[serde(rename = "Fecha_Creacion", default)]
    pub fecha_creacion: Option<String>,
    #[serde(rename = "Fecha_Modificacion", default)]
    pub fecha_modificacion: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct InvoiceCreate {
    #[serde(rename = "Codigo_Paciente")]
    pub codigo_paciente: i64,
    #[serde(rename = "Codigo_Consulta", skip_serializing_if = "Option::is_none")]
    pub codigo_consulta: Option<i64>,
    #[serde(rename = "Monto")]
    pub monto: f64,
    #[serde(rename = "Metodo_Pago", skip_serializing_if = "Option::is_none")]
    pub metodo_pago: Option<String>,
    #[serde(rename = "Estado_Pago", skip_serializing_if = "Option::is_none")]
    pub estado_pago: Option<String>,
    #[serde(rename = "Numero_Factura", skip_serializing_if = "Option::is_none")]
    pub numero_factura: Option<String>,
    #[serde(rename = "Fecha_Factura", skip_serializing_if = "Option::is_none")]
    pub fecha_factura: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct InvoiceUpdate {
    #[serde(rename = "Codigo_Paciente", skip_serializing_if = "Option::is_none")]
    pub codigo_paciente: Option<i64>,
    #[serde(rename = "Codigo_Consulta", skip_serializing_if = "Option::is_none")]
    pub codigo_consulta: Option<i64>,
    #[serde(rename = "Monto", skip_serializing_if = "Option::is_none")]
    pub monto: Option<f64>,
    #[serde(rename = "Metodo_Pago", skip_serializing_if = "Option::is_none")]
    pub metodo_pago: Option<String>,
    #[serde(rename = "Estado_Pago", skip_serializing_if = "Option::is_none")]
    pub estado_pago: Option<String>,
    #[serde(rename = "Numero_Factura", skip_serializing_if = "Option::is_none")]
    pub numero_factura: Option<String>,
    #[serde(rename = "Fecha_Factura", skip_serializing_if = "Option::is_none")]
    pub fecha_factura: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct InvoiceFilters {
    pub codigo_paciente: Option<i64>,
    pub estado_pago: Option<String>,
}

impl InvoiceFilters {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("codigo_paciente", self.codigo_paciente);
        q.push_opt("estado_pago", self.estado_pago.as_deref());
        q
    }
}

pub async fn list(filters: Option<&InvoiceFilters>) -> Result<Vec<Invoice>, ApiError> {
    let query = filters.map(InvoiceFilters::to_query).unwrap_or_default();
    http::get_json("/api/facturacion", &query).await
}

pub async fn get(codigo: i64) -> Result<Invoice, ApiError> {
    http::get_json(&format!("/api/facturacion/{codigo}"), &QueryParams::new()).await
}

pub async fn create(data: &InvoiceCreate) -> Result<Invoice, ApiError> {
    http::post_json("/api/facturacion", data).await
}

pub async fn update(codigo: i64, data: &InvoiceUpdate) -> Result<Invoice, ApiError> {
    http::put_json(&format!("/api/facturacion/{codigo}"), data).await
}

pub async fn delete(codigo: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/facturacion/{codigo}")).await
}
