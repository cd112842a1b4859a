//! REST clients for the clinic backend.
//!
//! DESIGN
//! ======
//! One module per backend entity, all funnelled through the shared request
//! pipeline in `http` (base URL, timeout, bearer injection, 401 handling).
//! Real HTTP only exists in the browser (`hydrate`); on the server the
//! calls degrade to errors, matching how pages tolerate missing data.

pub mod auth;
pub mod citas;
pub mod consultas;
pub mod doctores;
pub mod error;
pub mod examenes;
pub mod facturacion;
pub mod historial;
pub mod http;
pub mod pacientes;
pub mod recetas;
pub mod usuarios;
