//! Blog handlers: filtered listing and get by slug.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::BlogQuery;
use crate::app_state::AppState;
use crate::domain::{BlogCollection, BlogPost};
use crate::error::{ApiError, ErrorResponse};

/// `GET /blog` — Posts with category and tag facets.
///
/// Filters combine with AND. Facets are derived from the filtered posts;
/// without filters the source's own facet lists are returned.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when unfiltered and no posts exist, and
/// [`ApiError::Internal`] when the query string cannot be decoded.
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "Blog",
    summary = "List blog posts",
    description = "Returns posts plus `categories` and `popularTags`. A filter that matches nothing yields empty arrays, not a 404.",
    params(BlogQuery),
    responses(
        (status = 200, description = "Blog listing", body = BlogCollection),
        (status = 404, description = "No posts available", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse),
    )
)]
pub async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<BlogQuery>, QueryRejection>,
) -> Result<Json<BlogCollection>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::Internal(format!("blog query: {e}")))?;
    let filter = query.to_filter();

    let collection = state.content.blog(&filter).await;
    if filter.is_empty() && collection.blog.is_empty() {
        return Err(ApiError::NotFound("Blog posts not found".to_string()));
    }
    Ok(Json(collection))
}

/// `GET /blog/{slug}` — One post.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if no post has this slug.
#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = "Blog",
    summary = "Get blog post",
    params(
        ("slug" = String, Path, description = "Post slug"),
    ),
    responses(
        (status = 200, description = "Blog post", body = BlogPost),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    state
        .content
        .blog_post(&slug)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Blog post not found".to_string()))
}

/// Blog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/blog", get(list_posts))
        .route("/blog/{slug}", get(get_post))
}
