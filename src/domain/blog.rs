//! Blog posts and the blog listing filter.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::lenient;

/// A blog post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    /// Source-specific identifier.
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub id: String,
    /// URL-safe unique key.
    #[serde(deserialize_with = "lenient::null_default")]
    pub slug: String,
    /// Headline.
    #[serde(deserialize_with = "lenient::null_default")]
    pub title: String,
    /// Teaser paragraph.
    #[serde(deserialize_with = "lenient::null_default")]
    pub excerpt: String,
    /// Body as plain text.
    #[serde(deserialize_with = "lenient::null_default")]
    pub content: String,
    /// Author display name.
    #[serde(deserialize_with = "lenient::null_default")]
    pub author: String,
    /// Author role.
    #[serde(deserialize_with = "lenient::null_default")]
    pub author_title: String,
    /// Publication date as authored.
    #[serde(deserialize_with = "lenient::null_default")]
    pub date: String,
    /// Estimated reading time (`"5 min read"`).
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub read_time: String,
    /// Category from the site's fixed vocabulary.
    #[serde(deserialize_with = "lenient::null_default")]
    pub category: String,
    /// Free-form tags.
    #[serde(deserialize_with = "lenient::null_default")]
    pub tags: Vec<String>,
    /// Candidate for the hero slot.
    #[serde(deserialize_with = "lenient::null_default")]
    pub featured: bool,
    /// Cover image URL.
    #[serde(deserialize_with = "lenient::null_default")]
    pub image: String,
}

/// Posts plus the facet lists shown beside them.
///
/// This is also the response envelope for `GET /api/blog`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogCollection {
    /// Posts.
    #[serde(deserialize_with = "lenient::null_default")]
    pub blog: Vec<BlogPost>,
    /// Distinct categories.
    #[serde(deserialize_with = "lenient::null_default")]
    pub categories: Vec<String>,
    /// Distinct tags.
    #[serde(deserialize_with = "lenient::null_default")]
    pub popular_tags: Vec<String>,
}

impl BlogCollection {
    /// Builds a collection whose facets are derived from `posts`.
    #[must_use]
    pub fn derived_from(posts: Vec<BlogPost>) -> Self {
        let categories = distinct(posts.iter().map(|p| p.category.as_str()));
        let popular_tags = distinct(posts.iter().flat_map(|p| p.tags.iter().map(String::as_str)));
        Self {
            blog: posts,
            categories,
            popular_tags,
        }
    }
}

/// Listing filter for `GET /api/blog`. All set fields must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFilter {
    /// Case-insensitive category equality.
    pub category: Option<String>,
    /// Case-insensitive tag membership.
    pub tag: Option<String>,
    /// Only featured posts.
    pub featured: bool,
}

impl BlogFilter {
    /// Returns `true` when no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.tag.is_none() && !self.featured
    }

    /// Returns `true` when `post` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, post: &BlogPost) -> bool {
        if self.featured && !post.featured {
            return false;
        }
        if let Some(category) = &self.category
            && !eq_ignore_case(&post.category, category)
        {
            return false;
        }
        if let Some(tag) = &self.tag
            && !post.tags.iter().any(|t| eq_ignore_case(t, tag))
        {
            return false;
        }
        true
    }

    /// Keeps the matching posts and derives facets from them.
    #[must_use]
    pub fn apply(&self, posts: Vec<BlogPost>) -> BlogCollection {
        BlogCollection::derived_from(posts.into_iter().filter(|p| self.matches(p)).collect())
    }
}

/// Compares two labels under full Unicode lowercasing, so `"Éxito"` and
/// `"éxito"` are the same category.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// De-duplicates non-empty values ignoring case, keeping the first
/// spelling seen.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values.filter(|v| !v.is_empty()) {
        if !out.iter().any(|seen| eq_ignore_case(seen, value)) {
            out.push(value.to_string());
        }
    }
    out
}
