//! Site configuration and school record.
//!
//! Both are produced by the website editor and consumed here read-only.

use std::path::Path;

use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    error::{CoreError, Result},
    link::{LinkTarget, page_filename},
    section::{Section, strip_nulls},
};

/// Root input describing a school's website.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Theme, header and footer settings.
    #[serde(default)]
    pub global: Option<GlobalSettings>,

    /// Ordered pages.
    #[serde(default)]
    pub pages: Vec<Page>,

    /// Sections of the implicit home page, used when `pages` is empty.
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Pre-section configurations stored each block under its own key.
    #[serde(default)]
    pub hero: Option<Value>,
    #[serde(default)]
    pub about: Option<Value>,
    #[serde(default)]
    pub principal: Option<Value>,
    #[serde(default)]
    pub contact: Option<Value>,
}

impl SiteConfig {
    /// Parse a site configuration from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        from_document(serde_json::from_str(content)?)
    }

    /// Load a site configuration from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> Result<Self> {
        load_document(path)
    }
}

/// Site-wide settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    /// Theme name.
    pub theme: Option<String>,
    /// Theme colors.
    pub colors: ThemeColors,
    /// Logo URL.
    pub logo: Option<String>,
    /// Header settings.
    pub header: HeaderSettings,
    /// Footer settings.
    pub footer: FooterSettings,
    /// Raw CSS appended to the stylesheet.
    pub custom_css: Option<String>,
}

/// Theme colors as supplied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

/// Header settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderSettings {
    /// Navigation links in display order.
    pub links: Vec<NavLink>,
    /// Background color.
    pub bg_color: Option<String>,
    /// `center` stacks logo and links in the middle.
    pub menu_align: Option<String>,
}

impl HeaderSettings {
    /// Whether the menu is centered.
    #[must_use]
    pub fn is_centered(&self) -> bool {
        self.menu_align.as_deref() == Some("center")
    }
}

/// A navigation link.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavLink {
    pub label: String,
    pub url: Option<String>,
    pub target: Option<LinkTarget>,
}

/// Footer settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterSettings {
    /// Footer text; a copyright line is used when absent.
    pub text: Option<String>,
    /// Background color.
    pub bg_color: Option<String>,
}

/// A page of the site.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Routing path; `/` is the home page.
    #[serde(default = "root_slug")]
    pub slug: String,

    /// Display title.
    #[serde(default)]
    pub name: Option<String>,

    /// Ordered sections.
    #[serde(default)]
    pub sections: Vec<Section>,
}

fn root_slug() -> String {
    "/".to_string()
}

impl Page {
    /// Create a page with the given slug and sections.
    pub fn new(slug: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            slug: slug.into(),
            name: None,
            sections,
        }
    }

    /// Set the display title.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Output file name for this page.
    #[must_use]
    pub fn filename(&self) -> String {
        page_filename(&self.slug)
    }

    /// Display title, if one is set and not blank.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// The school the site belongs to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct School {
    /// School name.
    pub name: String,
    /// Profile image, used as a logo fallback.
    pub profile_picture: Option<String>,
    /// Public domain slug.
    pub domain: Option<String>,
    /// Latest notices, newest first.
    pub notices: Vec<Notice>,
    /// Gallery images, newest first.
    pub gallery: Vec<GalleryItem>,
}

impl School {
    /// Create a school record with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the profile picture.
    #[must_use]
    pub fn with_profile_picture(mut self, url: impl Into<String>) -> Self {
        self.profile_picture = Some(url.into());
        self
    }

    /// Parse a school record from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        from_document(serde_json::from_str(content)?)
    }

    /// Load a school record from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> Result<Self> {
        load_document(path)
    }
}

/// A notice board entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub created_at: Option<String>,
    pub file_url: Option<String>,
}

impl Notice {
    /// Calendar date of the notice (`YYYY-MM-DD`), if known.
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.created_at
            .as_deref()
            .map(|ts| ts.split('T').next().unwrap_or(ts))
            .filter(|d| !d.is_empty())
    }
}

/// A gallery image.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryItem {
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub title: Option<String>,
}

impl GalleryItem {
    /// Image source, preferring `url` over `imageUrl`.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        self.url.as_deref().or(self.image_url.as_deref())
    }
}

fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(CoreError::input(path, "file not found"));
    }

    let content = std::fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let document: Value = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| CoreError::input(path, e.to_string()))?
    } else {
        serde_json::from_str(&content).map_err(|e| CoreError::input(path, e.to_string()))?
    };

    from_document(document).map_err(|e| CoreError::input(path, e.to_string()))
}

/// Deserialize an editor document, treating `null` as absent.
fn from_document<T: DeserializeOwned>(document: Value) -> Result<T> {
    Ok(serde_json::from_value(strip_nulls(document))?)
}
