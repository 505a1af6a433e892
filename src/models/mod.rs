//! Database models shared across the RSA portal repository.

pub mod config;
pub mod customer;
