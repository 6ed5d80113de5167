//! Infrastructure layer: PostgreSQL-backed implementations of the domain
//! repository traits.

pub mod persistence;
