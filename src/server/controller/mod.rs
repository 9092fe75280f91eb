//! HTTP request handlers.
//!
//! Controllers extract path, query and body data, convert DTOs into parameter models,
//! call the service layer, and convert the resulting domain models back into DTOs.

pub mod parking_spot;
