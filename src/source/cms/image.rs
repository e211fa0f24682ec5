//! Image asset references → CDN URLs.
//!
//! The CMS stores images as references shaped like
//! `image-<assetId>-<width>x<height>-<format>`. The CDN serves the same
//! asset at `https://cdn.sanity.io/images/<project>/<dataset>/<assetId>-<width>x<height>.<format>`.

use url::Url;

/// Image CDN origin.
pub const CDN_BASE: &str = "https://cdn.sanity.io/images";

/// The three components of an image asset reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef<'a> {
    /// Asset identifier.
    pub id: &'a str,
    /// `<width>x<height>`.
    pub dimensions: &'a str,
    /// File extension (`jpg`, `png`, `webp`, ...).
    pub format: &'a str,
}

impl<'a> ImageRef<'a> {
    /// Parses `image-<id>-<WxH>-<format>`. Returns `None` when malformed.
    #[must_use]
    pub fn parse(reference: &'a str) -> Option<Self> {
        let rest = reference.strip_prefix("image-")?;
        let mut parts = rest.rsplitn(3, '-');
        let format = parts.next()?;
        let dimensions = parts.next()?;
        let id = parts.next()?;

        if id.is_empty() || !is_dimensions(dimensions) || !is_format(format) {
            return None;
        }
        Some(Self {
            id,
            dimensions,
            format,
        })
    }
}

fn is_dimensions(s: &str) -> bool {
    let Some((w, h)) = s.split_once('x') else {
        return false;
    };
    let digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    digits(w) && digits(h)
}

fn is_format(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Optional CDN transformations appended as query parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageOptions {
    /// Target width in pixels (`w`).
    pub width: Option<u32>,
    /// Target height in pixels (`h`).
    pub height: Option<u32>,
    /// JPEG/WebP quality 0-100 (`q`).
    pub quality: Option<u8>,
}

impl ImageOptions {
    /// Width-only resize.
    #[must_use]
    pub const fn width(width: u32) -> Self {
        Self {
            width: Some(width),
            height: None,
            quality: None,
        }
    }

    fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.quality.is_none()
    }
}

/// Builds CDN URLs for one project/dataset.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    /// Creates a builder for the given project and dataset.
    #[must_use]
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    /// Returns the CDN URL for `reference`, or `""` when the reference is
    /// missing or malformed. Callers treat `""` as "no image".
    #[must_use]
    pub fn url(&self, reference: Option<&str>, options: ImageOptions) -> String {
        let Some(image) = reference.and_then(ImageRef::parse) else {
            return String::new();
        };
        let raw = format!(
            "{CDN_BASE}/{}/{}/{}-{}.{}",
            self.project_id, self.dataset, image.id, image.dimensions, image.format
        );
        let Ok(mut url) = Url::parse(&raw) else {
            tracing::debug!(%raw, "image url did not parse");
            return String::new();
        };
        if !options.is_empty() {
            let mut query = url.query_pairs_mut();
            if let Some(w) = options.width {
                query.append_pair("w", &w.to_string());
            }
            if let Some(h) = options.height {
                query.append_pair("h", &h.to_string());
            }
            if let Some(q) = options.quality {
                query.append_pair("q", &q.to_string());
            }
        }
        url.into()
    }
}
