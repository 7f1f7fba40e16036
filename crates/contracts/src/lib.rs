//! Shared wire types for the Packarma admin application.
//!
//! Everything in this crate mirrors the JSON the REST backend produces or
//! consumes. The frontend holds only transient copies of these records; the
//! backend owns the data.

pub mod domain;
pub mod system;
