//! Ambassadors, renamed "leaders" in the product.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::lenient;

/// Optional social handles. Absent platforms are omitted from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SocialMedia {
    /// Instagram handle or URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    /// Facebook profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    /// LinkedIn profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Twitter/X handle or URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    /// TikTok handle or URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    /// YouTube channel URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    /// Personal website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A program ambassador / leader profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Ambassador {
    /// Source-specific identifier.
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub id: String,
    /// URL-safe unique key.
    #[serde(deserialize_with = "lenient::null_default")]
    pub slug: String,
    /// Full name.
    #[serde(deserialize_with = "lenient::null_default")]
    pub name: String,
    /// Role or headline.
    #[serde(deserialize_with = "lenient::null_default")]
    pub title: String,
    /// City or region.
    #[serde(deserialize_with = "lenient::null_default")]
    pub location: String,
    /// Country.
    #[serde(deserialize_with = "lenient::null_default")]
    pub country: String,
    /// Pull quote shown on the profile.
    #[serde(deserialize_with = "lenient::null_default")]
    pub quote: String,
    /// Card-length bio.
    #[serde(deserialize_with = "lenient::null_default")]
    pub short_bio: String,
    /// Profile-length bio as plain text.
    #[serde(deserialize_with = "lenient::null_default")]
    pub full_bio: String,
    /// Portrait URL.
    #[serde(deserialize_with = "lenient::null_default")]
    pub image: String,
    /// Profile banner URL.
    #[serde(deserialize_with = "lenient::null_default")]
    pub banner_image: String,
    /// Social handles.
    #[serde(deserialize_with = "lenient::null_default")]
    pub social_media: SocialMedia,
    /// Years spent in the program.
    #[serde(deserialize_with = "lenient::counter")]
    pub years_in_program: u32,
    /// Number of events hosted.
    #[serde(deserialize_with = "lenient::counter")]
    pub events_hosted: u32,
    /// Spoken languages, in display order.
    #[serde(deserialize_with = "lenient::null_default")]
    pub languages: Vec<String>,
    /// Areas of expertise, in display order.
    #[serde(deserialize_with = "lenient::null_default")]
    pub expertise: Vec<String>,
}

/// Response envelope for `GET /api/ambassadors` and `GET /api/leaders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AmbassadorsEnvelope {
    /// Profiles in source order.
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub ambassadors: Vec<Ambassador>,
}
