//! schoolsite Core Library
//!
//! Site model, normalization, link resolution, settings and error handling for
//! the schoolsite website generator.

pub mod config;
pub mod error;
pub mod link;
pub mod normalize;
pub mod section;
pub mod site;

pub use config::Config;
pub use error::{CoreError, Result};
pub use link::{LinkTarget, page_filename, resolve_link};
pub use normalize::{NormalizedSite, normalize, normalize_with};
pub use section::{Section, SectionId, SectionKind, SectionStyle};
pub use site::{Page, School, SiteConfig};
