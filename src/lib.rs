//! # latina-empire-api
//!
//! Read-only REST content API for the Latina Empire website: the events
//! calendar, the ambassador (leader) directory and the blog.
//!
//! Content comes from one of two sources chosen at startup: JSON fixture
//! files on disk, or a Sanity headless CMS when its project id and dataset
//! are configured. Both are normalized into the same records, and failures
//! in either degrade to "no data" rather than reaching clients.
//!
//! ## Architecture
//!
//! ```text
//! Clients (website, admin UI)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ContentService (service/)
//!     │
//!     ├── ContentSource (source/)
//!     │       ├── FixtureSource ── data/*.json
//!     │       └── CmsSource ────── Sanity query API
//!     │
//!     └── Records & envelopes (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod source;
