//! Link targets and link resolution.
//!
//! Every rendered link carries a target kind that decides how its URL is
//! interpreted in the generated static site.

use serde::{Deserialize, Serialize};

/// How a link URL is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LinkTarget {
    /// An anchor within the current document (`#section-3`).
    Section,
    /// Another page of the site, addressed by slug.
    Page,
    /// A literal URL, usually external.
    Url,
}

impl LinkTarget {
    /// Name used in site configurations.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Page => "page",
            Self::Url => "url",
        }
    }
}

impl From<String> for LinkTarget {
    fn from(value: String) -> Self {
        match value.as_str() {
            "section" => Self::Section,
            "page" => Self::Page,
            _ => Self::Url,
        }
    }
}

impl From<LinkTarget> for String {
    fn from(value: LinkTarget) -> Self {
        value.as_str().to_string()
    }
}

/// Output file name for a page slug.
///
/// The root slug (`/`, or an empty slug) maps to `index.html`; any other slug
/// loses its surrounding slashes and gains `.html`.
#[must_use]
pub fn page_filename(slug: &str) -> String {
    let trimmed = slug.trim().trim_matches('/');
    if trimmed.is_empty() {
        "index.html".to_string()
    } else {
        format!("{trimmed}.html")
    }
}

/// Resolve a link URL according to its target.
///
/// A missing or empty URL resolves to `#`.
#[must_use]
pub fn resolve_link(url: Option<&str>, target: Option<LinkTarget>) -> String {
    let Some(url) = url.filter(|u| !u.is_empty()) else {
        return "#".to_string();
    };

    match target {
        Some(LinkTarget::Section) if url.starts_with('#') => url.to_string(),
        Some(LinkTarget::Page) => page_filename(url),
        _ => url.to_string(),
    }
}
