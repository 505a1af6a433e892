//! Domain aggregates exposed by the RSA portal service layer.

pub mod customer;
pub mod policy;
pub mod types;
