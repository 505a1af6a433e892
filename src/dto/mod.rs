//! DTO modules that bridge services with templates and APIs.

pub mod api;
pub mod customers;
pub mod policies;
