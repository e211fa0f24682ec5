//! Service layer: the data-source selector.
//!
//! [`ContentService`] owns the active [`crate::source::ContentSource`] and is
//! the only place source errors are caught, logged and turned into empty
//! results.

pub mod content_service;

pub use content_service::ContentService;
