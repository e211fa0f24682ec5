//! Query parameters and system response bodies.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::BlogFilter;

/// Query parameters for `GET /api/blog`.
///
/// Values arrive as raw strings; empty values are treated as absent.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlogQuery {
    /// Category to match, ignoring case.
    #[serde(default)]
    pub category: Option<String>,
    /// Tag to match, ignoring case.
    #[serde(default)]
    pub tag: Option<String>,
    /// `true` restricts to featured posts; any other value is ignored.
    #[serde(default)]
    pub featured: Option<String>,
}

impl BlogQuery {
    /// Converts the raw parameters into a [`BlogFilter`].
    #[must_use]
    pub fn to_filter(&self) -> BlogFilter {
        BlogFilter {
            category: non_blank(self.category.as_deref()),
            tag: non_blank(self.tag.as_deref()),
            featured: self
                .featured
                .as_deref()
                .is_some_and(|v| v.trim().eq_ignore_ascii_case("true")),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` when the process is serving.
    pub status: String,
    /// Active content source (`"fixture"` or `"cms"`).
    pub source: String,
    /// Server time, RFC 3339.
    pub timestamp: String,
    /// Crate version.
    pub version: String,
}
