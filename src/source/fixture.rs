//! JSON fixture files on disk.
//!
//! Every call reads the file again; there is no cache, so edits show up on
//! the next request without a restart.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::ContentSource;
use crate::domain::blog::eq_ignore_case;
use crate::domain::{
    Ambassador, AmbassadorsEnvelope, BlogCollection, BlogPost, Event, EventsEnvelope,
};
use crate::error::SourceError;

/// File name of the events fixture.
pub const EVENTS_FILE: &str = "events.json";
/// File name of the ambassadors fixture.
pub const AMBASSADORS_FILE: &str = "ambassadors.json";
/// File name of the blog fixture.
pub const BLOG_FILE: &str = "blog.json";

/// Reads content from `events.json`, `ambassadors.json` and `blog.json`
/// in a data directory.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    data_dir: PathBuf,
}

impl FixtureSource {
    /// Creates a source rooted at `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    async fn load<T: DeserializeOwned>(&self, file: &str) -> Result<T, SourceError> {
        let path = self.data_dir.join(file);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| SourceError::FixtureRead {
                path: path.clone(),
                source,
            })?;
        let parsed = serde_json::from_slice(&bytes)
            .map_err(|source| SourceError::FixtureParse { path, source })?;
        Ok(parsed)
    }
}

#[async_trait]
impl ContentSource for FixtureSource {
    fn kind(&self) -> &'static str {
        "fixture"
    }

    async fn list_events(&self) -> Result<Vec<Event>, SourceError> {
        let envelope: EventsEnvelope = self.load(EVENTS_FILE).await?;
        Ok(envelope.events)
    }

    async fn event_by_slug(&self, slug: &str) -> Result<Option<Event>, SourceError> {
        let events = self.list_events().await?;
        Ok(events.into_iter().find(|e| e.slug == slug))
    }

    async fn list_ambassadors(&self) -> Result<Vec<Ambassador>, SourceError> {
        let envelope: AmbassadorsEnvelope = self.load(AMBASSADORS_FILE).await?;
        Ok(envelope.ambassadors)
    }

    async fn ambassador_by_slug(&self, slug: &str) -> Result<Option<Ambassador>, SourceError> {
        let ambassadors = self.list_ambassadors().await?;
        Ok(ambassadors.into_iter().find(|a| a.slug == slug))
    }

    async fn blog(&self) -> Result<BlogCollection, SourceError> {
        self.load(BLOG_FILE).await
    }

    async fn blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, SourceError> {
        let collection = self.blog().await?;
        Ok(collection.blog.into_iter().find(|p| p.slug == slug))
    }

    async fn featured_posts(&self) -> Result<Vec<BlogPost>, SourceError> {
        let collection = self.blog().await?;
        Ok(collection.blog.into_iter().filter(|p| p.featured).collect())
    }

    async fn posts_by_category(&self, category: &str) -> Result<Vec<BlogPost>, SourceError> {
        let collection = self.blog().await?;
        Ok(collection
            .blog
            .into_iter()
            .filter(|p| eq_ignore_case(&p.category, category))
            .collect())
    }
}
