//! GROQ queries. Projections return the raw document shapes decoded by
//! [`super::documents`].

const EVENT_PROJECTION: &str = r#"{
  _id,
  "slug": slug.current,
  name,
  date,
  startTime,
  endTime,
  location,
  locationAddress,
  locationMapUrl,
  image,
  bannerImage,
  shortDescription,
  description,
  ticketPrice,
  ticketLink,
  isPast,
  host->{name, title, image}
}"#;

const AMBASSADOR_PROJECTION: &str = r#"{
  _id,
  "slug": slug.current,
  name,
  title,
  location,
  country,
  quote,
  shortBio,
  fullBio,
  image,
  bannerImage,
  socialMedia,
  yearsInProgram,
  eventsHosted,
  languages,
  expertise
}"#;

const POST_PROJECTION: &str = r#"{
  _id,
  "slug": slug.current,
  title,
  excerpt,
  content,
  author->{name, title},
  date,
  readTime,
  category,
  tags,
  featured,
  image
}"#;

/// All events, newest first.
#[must_use]
pub fn all_events() -> String {
    format!(r#"*[_type == "event"] | order(date desc) {EVENT_PROJECTION}"#)
}

/// One event by `$slug`.
#[must_use]
pub fn event_by_slug() -> String {
    format!(r#"*[_type == "event" && slug.current == $slug][0] {EVENT_PROJECTION}"#)
}

/// All ambassadors by name.
#[must_use]
pub fn all_ambassadors() -> String {
    format!(r#"*[_type == "ambassador"] | order(name asc) {AMBASSADOR_PROJECTION}"#)
}

/// One ambassador by `$slug`.
#[must_use]
pub fn ambassador_by_slug() -> String {
    format!(r#"*[_type == "ambassador" && slug.current == $slug][0] {AMBASSADOR_PROJECTION}"#)
}

/// All posts, newest first.
#[must_use]
pub fn all_posts() -> String {
    format!(r#"*[_type == "blogPost"] | order(date desc) {POST_PROJECTION}"#)
}

/// One post by `$slug`.
#[must_use]
pub fn post_by_slug() -> String {
    format!(r#"*[_type == "blogPost" && slug.current == $slug][0] {POST_PROJECTION}"#)
}

/// Featured posts, newest first.
#[must_use]
pub fn featured_posts() -> String {
    format!(r#"*[_type == "blogPost" && featured == true] | order(date desc) {POST_PROJECTION}"#)
}

/// Posts in `$category`, case-insensitively, newest first.
#[must_use]
pub fn posts_by_category() -> String {
    format!(
        r#"*[_type == "blogPost" && lower(category) == lower($category)] | order(date desc) {POST_PROJECTION}"#
    )
}
