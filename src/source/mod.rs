//! Content sources: where records come from.
//!
//! [`ContentSource`] is the one interface both backends implement, so the
//! rest of the service never branches on which one is active:
//!
//! ```text
//! ContentService
//!     │
//!     └── Arc<dyn ContentSource>
//!             ├── FixtureSource  (JSON files under DATA_DIR)
//!             └── CmsSource      (Sanity GROQ queries over HTTP)
//! ```

pub mod cms;
pub mod fixture;

use async_trait::async_trait;

use crate::domain::{Ambassador, BlogCollection, BlogPost, Event};
use crate::error::SourceError;

pub use cms::CmsSource;
pub use fixture::FixtureSource;

/// Read access to site content.
///
/// Implementations return errors rather than swallowing them; the content
/// service decides how to degrade.
#[async_trait]
pub trait ContentSource: Send + Sync + std::fmt::Debug {
    /// Short name for logs and the health endpoint (`"fixture"`, `"cms"`).
    fn kind(&self) -> &'static str;

    /// All events.
    async fn list_events(&self) -> Result<Vec<Event>, SourceError>;

    /// The event with the given slug, if any.
    async fn event_by_slug(&self, slug: &str) -> Result<Option<Event>, SourceError>;

    /// All ambassador profiles.
    async fn list_ambassadors(&self) -> Result<Vec<Ambassador>, SourceError>;

    /// The ambassador with the given slug, if any.
    async fn ambassador_by_slug(&self, slug: &str) -> Result<Option<Ambassador>, SourceError>;

    /// All blog posts with their facet lists.
    async fn blog(&self) -> Result<BlogCollection, SourceError>;

    /// The blog post with the given slug, if any.
    async fn blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, SourceError>;

    /// Posts flagged as featured.
    async fn featured_posts(&self) -> Result<Vec<BlogPost>, SourceError>;

    /// Posts whose category equals `category`, ignoring case.
    async fn posts_by_category(&self, category: &str) -> Result<Vec<BlogPost>, SourceError>;
}
