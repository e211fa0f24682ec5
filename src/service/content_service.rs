//! Content service: picks a source once and degrades its failures.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::domain::event::sort_newest_first;
use crate::domain::{Ambassador, BlogCollection, BlogFilter, BlogPost, Event};
use crate::error::{ConfigError, SourceError};
use crate::source::{CmsSource, ContentSource, FixtureSource};

/// Read-side orchestration over one [`ContentSource`].
///
/// Every method is infallible: a source error is logged and reported as
/// "no data", so a CMS outage and a missing fixture file look the same to
/// callers.
#[derive(Debug, Clone)]
pub struct ContentService {
    source: Arc<dyn ContentSource>,
}

impl ContentService {
    /// Creates a service over an explicit source.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Chooses the CMS when it is configured, otherwise the fixture files
    /// under `config.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the CMS is configured but its client
    /// cannot be built.
    pub fn from_config(config: &SiteConfig) -> Result<Self, ConfigError> {
        let source: Arc<dyn ContentSource> = match CmsSource::from_config(&config.cms)? {
            Some(cms) => Arc::new(cms),
            None => Arc::new(FixtureSource::new(config.data_dir.clone())),
        };
        tracing::info!(source = source.kind(), "content source selected");
        Ok(Self::new(source))
    }

    /// Returns the active source's kind.
    #[must_use]
    pub fn source_kind(&self) -> &'static str {
        self.source.kind()
    }

    /// All events, newest first. Empty when the source fails.
    pub async fn events(&self) -> Vec<Event> {
        let mut events = self.degrade("list_events", self.source.list_events().await);
        sort_newest_first(&mut events);
        events
    }

    /// One event by slug.
    pub async fn event(&self, slug: &str) -> Option<Event> {
        self.degrade("event_by_slug", self.source.event_by_slug(slug).await)
    }

    /// All ambassadors in source order.
    pub async fn ambassadors(&self) -> Vec<Ambassador> {
        self.degrade("list_ambassadors", self.source.list_ambassadors().await)
    }

    /// One ambassador by slug.
    pub async fn ambassador(&self, slug: &str) -> Option<Ambassador> {
        self.degrade("ambassador_by_slug", self.source.ambassador_by_slug(slug).await)
    }

    /// Blog listing.
    ///
    /// Without a filter the source collection is returned verbatim,
    /// including its own facet lists. With a filter, candidates are narrowed
    /// by the cheapest source query available, the full filter is applied,
    /// and facets are derived from the survivors.
    pub async fn blog(&self, filter: &BlogFilter) -> BlogCollection {
        if filter.is_empty() {
            return self.degrade("blog", self.source.blog().await);
        }

        let candidates = if let Some(category) = &filter.category {
            self.degrade("posts_by_category", self.source.posts_by_category(category).await)
        } else if filter.featured {
            self.degrade("featured_posts", self.source.featured_posts().await)
        } else {
            self.degrade("blog", self.source.blog().await).blog
        };
        filter.apply(candidates)
    }

    /// One blog post by slug.
    pub async fn blog_post(&self, slug: &str) -> Option<BlogPost> {
        self.degrade("blog_post_by_slug", self.source.blog_post_by_slug(slug).await)
    }

    fn degrade<T: Default>(&self, operation: &'static str, result: Result<T, SourceError>) -> T {
        match result {
            Ok(value) => value,
            Err(SourceError::Cms(err)) => {
                tracing::error!(operation, error = %err, "cms query failed; serving empty result");
                T::default()
            }
            Err(err) => {
                tracing::warn!(
                    operation,
                    source = self.source.kind(),
                    error = %err,
                    "content unavailable; serving empty result"
                );
                T::default()
            }
        }
    }
}
