//! Domain layer: the three content record kinds and their envelopes.
//!
//! Records are the single normalized shape both data sources converge on.
//! They are read-only from the service's point of view: created out of band
//! by editing fixture files or publishing in the CMS.

pub mod ambassador;
pub mod blog;
pub mod event;
pub mod lenient;

pub use ambassador::{Ambassador, AmbassadorsEnvelope, SocialMedia};
pub use blog::{BlogCollection, BlogFilter, BlogPost};
pub use event::{Event, EventsEnvelope};
