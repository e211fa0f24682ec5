//! Data Transfer Objects for REST request/response serialization.
//!
//! Content records double as response bodies (see [`crate::domain`]);
//! this module holds only the request-side shapes and the system payloads.

pub mod common_dto;

pub use common_dto::*;
