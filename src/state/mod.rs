//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State structs are plain data wrapped in `RwSignal` at the app layer, so
//! the access-control logic stays free of reactive types and tests natively.

pub mod role;
pub mod session;
