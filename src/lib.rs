//! External markdown link formatting and insertion.

mod config;
mod document;
mod link;
mod normalize;
pub mod prompt;

pub use config::Config;
pub use document::{Document, Position};
pub use link::{LinkRequest, format_link, is_blank};
pub use normalize::{is_well_formed, normalize_url};
