//! View routing: the static route table and the per-navigation guard.

pub mod guard;
pub mod routes;
