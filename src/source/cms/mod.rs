//! Headless CMS adapter backed by the Sanity query API.

pub mod client;
pub mod documents;
pub mod image;
pub mod queries;

use async_trait::async_trait;

use super::ContentSource;
use crate::config::CmsConfig;
use crate::domain::{Ambassador, BlogCollection, BlogPost, Event};
use crate::error::{ConfigError, SourceError};

pub use client::CmsClient;
pub use documents::{AmbassadorDocument, EventDocument, PostDocument};
pub use image::{ImageOptions, ImageRef, ImageUrlBuilder};

/// [`ContentSource`] that queries the CMS on every call.
#[derive(Debug, Clone)]
pub struct CmsSource {
    client: CmsClient,
    images: ImageUrlBuilder,
}

impl CmsSource {
    /// Creates a source from an existing client.
    #[must_use]
    pub fn new(client: CmsClient, images: ImageUrlBuilder) -> Self {
        Self { client, images }
    }

    /// Builds a source from configuration; `Ok(None)` when the CMS is not
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CmsClient`] if the HTTP client cannot be built.
    pub fn from_config(config: &CmsConfig) -> Result<Option<Self>, ConfigError> {
        let Some((project_id, dataset)) = config.credentials() else {
            return Ok(None);
        };
        let images = ImageUrlBuilder::new(project_id, dataset);
        Ok(CmsClient::from_config(config)?.map(|client| Self::new(client, images)))
    }

    async fn posts(&self, groq: &str, params: &[(&str, &str)]) -> Result<Vec<BlogPost>, SourceError> {
        let docs: Vec<PostDocument> = self.client.fetch(groq, params).await?;
        Ok(docs.into_iter().map(|d| d.into_post(&self.images)).collect())
    }
}

#[async_trait]
impl ContentSource for CmsSource {
    fn kind(&self) -> &'static str {
        "cms"
    }

    async fn list_events(&self) -> Result<Vec<Event>, SourceError> {
        let docs: Vec<EventDocument> = self.client.fetch(&queries::all_events(), &[]).await?;
        Ok(docs.into_iter().map(|d| d.into_event(&self.images)).collect())
    }

    async fn event_by_slug(&self, slug: &str) -> Result<Option<Event>, SourceError> {
        let doc: Option<EventDocument> = self
            .client
            .fetch(&queries::event_by_slug(), &[("slug", slug)])
            .await?;
        Ok(doc.map(|d| d.into_event(&self.images)))
    }

    async fn list_ambassadors(&self) -> Result<Vec<Ambassador>, SourceError> {
        let docs: Vec<AmbassadorDocument> =
            self.client.fetch(&queries::all_ambassadors(), &[]).await?;
        Ok(docs
            .into_iter()
            .map(|d| d.into_ambassador(&self.images))
            .collect())
    }

    async fn ambassador_by_slug(&self, slug: &str) -> Result<Option<Ambassador>, SourceError> {
        let doc: Option<AmbassadorDocument> = self
            .client
            .fetch(&queries::ambassador_by_slug(), &[("slug", slug)])
            .await?;
        Ok(doc.map(|d| d.into_ambassador(&self.images)))
    }

    async fn blog(&self) -> Result<BlogCollection, SourceError> {
        let posts = self.posts(&queries::all_posts(), &[]).await?;
        Ok(BlogCollection::derived_from(posts))
    }

    async fn blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, SourceError> {
        let doc: Option<PostDocument> = self
            .client
            .fetch(&queries::post_by_slug(), &[("slug", slug)])
            .await?;
        Ok(doc.map(|d| d.into_post(&self.images)))
    }

    async fn featured_posts(&self) -> Result<Vec<BlogPost>, SourceError> {
        self.posts(&queries::featured_posts(), &[]).await
    }

    async fn posts_by_category(&self, category: &str) -> Result<Vec<BlogPost>, SourceError> {
        self.posts(&queries::posts_by_category(), &[("category", category)])
            .await
    }
}
