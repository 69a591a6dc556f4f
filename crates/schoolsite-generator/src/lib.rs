//! schoolsite Generator Library
//!
//! Turns a school's site configuration into a dependency-free static website
//! packaged as a zip archive.
//!
//! # Modules
//!
//! - [`template`] - Page shell templates with variable interpolation
//! - [`escape`] - HTML escaping of configuration text
//! - [`css`] - Stylesheet compilation with theme variables and scoped custom CSS
//! - [`render`] - Per-section HTML templates
//! - [`script`] - Client behavior script
//! - [`html`] - Page assembly
//! - [`archive`] - Deterministic zip packaging
//! - [`build`] - Build orchestration

pub mod archive;
pub mod build;
pub mod css;
pub mod escape;
pub mod html;
pub mod render;
pub mod script;
pub mod template;

use chrono::{DateTime, Utc};
use schoolsite_core::{Config, School, SiteConfig};

pub use archive::{ArchiveError, SiteFile};
pub use build::{BuildError, BuildStats, Builder, SiteArchive};
pub use css::StyleCompiler;
pub use html::HtmlGenerator;
pub use render::render_section;
pub use template::{Template, TemplateContext, TemplateRegistry};

/// Generate a site with default settings and return the archive bytes.
pub fn generate_website(
    site: &SiteConfig,
    school: &School,
    now: DateTime<Utc>,
) -> build::Result<Vec<u8>> {
    Ok(Builder::new(Config::default(), now).generate(site, school)?.bytes)
}
