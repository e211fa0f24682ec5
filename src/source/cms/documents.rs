//! Raw CMS document shapes and their total mapping into records.
//!
//! Every field is optional because projections return `null` for anything
//! an editor left blank. The `into_*` conversions never fail: missing
//! values become empty strings, `false`, `0` or empty lists.

use serde::Deserialize;
use serde_json::Value;

use super::image::{ImageOptions, ImageUrlBuilder};
use crate::domain::{Ambassador, BlogPost, Event, SocialMedia, lenient};

/// Portrait size requested for event hosts.
const HOST_IMAGE_WIDTH: u32 = 400;

/// An image field: `{ asset: { _ref: "image-..." } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CmsImage {
    /// Asset reference holder.
    #[serde(default)]
    pub asset: Option<CmsAssetRef>,
}

/// The `asset` object inside an image field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CmsAssetRef {
    /// `image-<id>-<WxH>-<format>`.
    #[serde(rename = "_ref", default)]
    pub reference: Option<String>,
}

impl CmsImage {
    /// Returns the asset reference string, if present.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.asset.as_ref()?.reference.as_deref()
    }
}

/// Dereferenced event host.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostRef {
    /// Host name.
    #[serde(default)]
    pub name: Option<String>,
    /// Host role.
    #[serde(default)]
    pub title: Option<String>,
    /// Host portrait.
    #[serde(default)]
    pub image: Option<CmsImage>,
}

/// Dereferenced blog author.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorRef {
    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
    /// Author role.
    #[serde(default)]
    pub title: Option<String>,
}

/// `event` document as projected by the event queries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDocument {
    #[serde(rename = "_id")]
    id: Option<String>,
    slug: Option<String>,
    name: Option<String>,
    date: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    location: Option<String>,
    location_address: Option<String>,
    location_map_url: Option<String>,
    image: Option<CmsImage>,
    banner_image: Option<CmsImage>,
    short_description: Option<String>,
    description: Option<Value>,
    #[serde(deserialize_with = "lenient::string_or_number")]
    ticket_price: String,
    ticket_link: Option<String>,
    is_past: Option<bool>,
    host: Option<HostRef>,
}

impl EventDocument {
    /// Maps the document into an [`Event`].
    #[must_use]
    pub fn into_event(self, images: &ImageUrlBuilder) -> Event {
        let host = self.host.unwrap_or_default();
        Event {
            id: self.id.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            start_time: self.start_time.unwrap_or_default(),
            end_time: self.end_time.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            location_address: self.location_address.unwrap_or_default(),
            location_map_url: self.location_map_url.unwrap_or_default(),
            image: image_url(images, self.image.as_ref(), ImageOptions::default()),
            banner_image: image_url(images, self.banner_image.as_ref(), ImageOptions::default()),
            short_description: self.short_description.unwrap_or_default(),
            description: plain_text(self.description.as_ref()),
            host: host.name.unwrap_or_default(),
            host_title: host.title.unwrap_or_default(),
            host_image: image_url(
                images,
                host.image.as_ref(),
                ImageOptions::width(HOST_IMAGE_WIDTH),
            ),
            ticket_price: self.ticket_price,
            ticket_link: self.ticket_link.unwrap_or_default(),
            is_past: self.is_past.unwrap_or(false),
        }
    }
}

/// `ambassador` document as projected by the ambassador queries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AmbassadorDocument {
    #[serde(rename = "_id")]
    id: Option<String>,
    slug: Option<String>,
    name: Option<String>,
    title: Option<String>,
    location: Option<String>,
    country: Option<String>,
    quote: Option<String>,
    short_bio: Option<String>,
    full_bio: Option<Value>,
    image: Option<CmsImage>,
    banner_image: Option<CmsImage>,
    social_media: Option<SocialMedia>,
    #[serde(deserialize_with = "lenient::counter")]
    years_in_program: u32,
    #[serde(deserialize_with = "lenient::counter")]
    events_hosted: u32,
    languages: Option<Vec<Option<String>>>,
    expertise: Option<Vec<Option<String>>>,
}

impl AmbassadorDocument {
    /// Maps the document into an [`Ambassador`].
    #[must_use]
    pub fn into_ambassador(self, images: &ImageUrlBuilder) -> Ambassador {
        Ambassador {
            id: self.id.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            quote: self.quote.unwrap_or_default(),
            short_bio: self.short_bio.unwrap_or_default(),
            full_bio: plain_text(self.full_bio.as_ref()),
            image: image_url(images, self.image.as_ref(), ImageOptions::default()),
            banner_image: image_url(images, self.banner_image.as_ref(), ImageOptions::default()),
            social_media: self.social_media.unwrap_or_default(),
            years_in_program: self.years_in_program,
            events_hosted: self.events_hosted,
            languages: strings(self.languages),
            expertise: strings(self.expertise),
        }
    }
}

/// `blogPost` document as projected by the blog queries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostDocument {
    #[serde(rename = "_id")]
    id: Option<String>,
    slug: Option<String>,
    title: Option<String>,
    excerpt: Option<String>,
    content: Option<Value>,
    author: Option<AuthorRef>,
    date: Option<String>,
    #[serde(deserialize_with = "lenient::string_or_number")]
    read_time: String,
    category: Option<String>,
    tags: Option<Vec<Option<String>>>,
    featured: Option<bool>,
    image: Option<CmsImage>,
}

impl PostDocument {
    /// Maps the document into a [`BlogPost`].
    #[must_use]
    pub fn into_post(self, images: &ImageUrlBuilder) -> BlogPost {
        let author = self.author.unwrap_or_default();
        BlogPost {
            id: self.id.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            excerpt: self.excerpt.unwrap_or_default(),
            content: plain_text(self.content.as_ref()),
            author: author.name.unwrap_or_default(),
            author_title: author.title.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            read_time: self.read_time,
            category: self.category.unwrap_or_default(),
            tags: strings(self.tags),
            featured: self.featured.unwrap_or(false),
            image: image_url(images, self.image.as_ref(), ImageOptions::default()),
        }
    }
}

fn image_url(images: &ImageUrlBuilder, image: Option<&CmsImage>, options: ImageOptions) -> String {
    images.url(image.and_then(CmsImage::reference), options)
}

fn strings(values: Option<Vec<Option<String>>>) -> Vec<String> {
    values.unwrap_or_default().into_iter().flatten().collect()
}

/// Flattens a rich-text field to plain text.
///
/// Plain strings pass through. Block arrays become the concatenated span
/// text of each block, blocks separated by a blank line. Anything else is
/// empty.
#[must_use]
pub fn plain_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(blocks)) => blocks
            .iter()
            .filter_map(block_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n"),
        _ => String::new(),
    }
}

fn block_text(block: &Value) -> Option<String> {
    let children = block.get("children")?.as_array()?;
    Some(
        children
            .iter()
            .filter_map(|span| span.get("text").and_then(Value::as_str))
            .collect(),
    )
}
