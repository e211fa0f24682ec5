//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Content endpoints are mounted under `/api`; `/health` sits at the root.

pub mod dto;
pub mod handlers;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::app_state::AppState;
use crate::domain::{
    Ambassador, AmbassadorsEnvelope, BlogCollection, BlogPost, Event, EventsEnvelope, SocialMedia,
};
use crate::error::ErrorResponse;

/// OpenAPI description of every endpoint.
#[derive(Debug, Clone, Copy, OpenApi)]
#[openapi(
    info(
        title = "Latina Empire content API",
        description = "Events, leaders and blog posts for the Latina Empire website."
    ),
    paths(
        handlers::events::list_events,
        handlers::events::get_event,
        handlers::ambassadors::list_ambassadors,
        handlers::ambassadors::get_ambassador,
        handlers::ambassadors::list_leaders,
        handlers::ambassadors::get_leader,
        handlers::blog::list_posts,
        handlers::blog::get_post,
        handlers::system::health_handler,
    ),
    components(schemas(
        Event,
        EventsEnvelope,
        Ambassador,
        AmbassadorsEnvelope,
        SocialMedia,
        BlogPost,
        BlogCollection,
        ErrorResponse,
        dto::HealthResponse,
    )),
    tags(
        (name = "Events", description = "Community events"),
        (name = "Ambassadors", description = "Ambassador / leader profiles"),
        (name = "Blog", description = "Blog posts"),
        (name = "System", description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Builds the API router with every endpoint, without middleware.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes())
}

/// Builds the complete application: routes, JSON fallbacks, middleware
/// and (with the `swagger-ui` feature) the interactive API docs.
pub fn build_app(state: AppState) -> Router {
    let router = build_router();

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
    #[cfg(not(feature = "swagger-ui"))]
    let router = router.route(
        "/api-docs/openapi.json",
        axum::routing::get(|| async { axum::Json(ApiDoc::openapi()) }),
    );

    router
        .fallback(handlers::system::not_found_fallback)
        .method_not_allowed_fallback(handlers::system::method_not_allowed_fallback)
        .layer(CatchPanicLayer::custom(handlers::system::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
