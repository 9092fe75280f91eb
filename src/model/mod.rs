//! Wire-level DTOs shared by the HTTP layer.
//!
//! These types define the JSON contract of the API. Server-side domain models convert
//! into and out of them at the controller boundary.

pub mod api;
pub mod parking_spot;
