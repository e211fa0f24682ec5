//! REST endpoint handlers organized by resource.

pub mod ambassadors;
pub mod blog;
pub mod events;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all content routes under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(events::routes())
        .merge(ambassadors::routes())
        .merge(blog::routes())
}
