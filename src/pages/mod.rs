//! Views wired into the router.
//!
//! Visual design is deliberately minimal; access control lives in the
//! navigation guard, not in the pages.

pub mod home;
pub mod login;
pub mod secciones;
