//! Configuration normalization.
//!
//! Turns a raw [`SiteConfig`] into a [`NormalizedSite`] with every default
//! filled in, so later stages never have to ask whether something is missing.

use std::collections::HashMap;

use serde_json::Value;

use crate::{
    config::ThemeConfig,
    error::{CoreError, Result},
    section::{Section, SectionId, SectionKind},
    site::{FooterSettings, HeaderSettings, Page, School, SiteConfig},
};

/// Theme applied when a configuration has no `global` block.
pub const DEFAULT_THEME: &str = "modern-white";

/// A site configuration with all defaults applied.
#[derive(Debug, Clone)]
pub struct NormalizedSite {
    /// Theme name.
    pub theme: String,
    /// Primary color.
    pub primary: String,
    /// Secondary color.
    pub secondary: String,
    /// Explicit logo URL.
    pub logo: Option<String>,
    /// Header settings.
    pub header: HeaderSettings,
    /// Footer settings.
    pub footer: FooterSettings,
    /// Site-wide custom CSS.
    pub custom_css: Option<String>,
    /// At least one page.
    pub pages: Vec<Page>,
}

impl NormalizedSite {
    /// All sections of all pages, in page-then-section order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.pages.iter().flat_map(|page| page.sections.iter())
    }

    /// Ensure no two pages derive the same output file name.
    pub fn check_filenames(&self) -> Result<()> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for page in &self.pages {
            let filename = page.filename();
            if let Some(first) = seen.get(&filename) {
                return Err(CoreError::DuplicateFilename {
                    filename,
                    first: (*first).to_string(),
                    second: page.slug.clone(),
                });
            }
            seen.insert(filename, &page.slug);
        }
        Ok(())
    }
}

/// Normalize with the built-in theme fallbacks.
#[must_use]
pub fn normalize(raw: &SiteConfig, school: &School) -> NormalizedSite {
    normalize_with(raw, school, &ThemeConfig::default())
}

/// Normalize using the given theme fallbacks.
#[must_use]
pub fn normalize_with(raw: &SiteConfig, school: &School, theme: &ThemeConfig) -> NormalizedSite {
    let global = raw.global.clone().unwrap_or_default();

    let mut pages = if raw.pages.is_empty() {
        tracing::debug!("no pages configured, synthesizing home page");
        vec![Page::new("/", implicit_sections(raw)).with_name("Home")]
    } else {
        raw.pages.clone()
    };

    let mut next_auto_id = 0usize;
    for page in &mut pages {
        for section in &mut page.sections {
            if section.id.is_empty() {
                next_auto_id += 1;
                section.id = SectionId::new(format!("auto-{next_auto_id}"));
            }
            attach_snapshot(&mut section.kind, school);
        }
    }

    NormalizedSite {
        theme: global
            .theme
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_THEME.to_string()),
        primary: non_empty(global.colors.primary).unwrap_or_else(|| theme.primary.clone()),
        secondary: non_empty(global.colors.secondary).unwrap_or_else(|| theme.secondary.clone()),
        logo: non_empty(global.logo),
        header: global.header,
        footer: global.footer,
        custom_css: non_empty(global.custom_css),
        pages,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Sections of the synthesized home page: the top-level `sections` list, or
/// the legacy per-block keys when that list is empty.
fn implicit_sections(raw: &SiteConfig) -> Vec<Section> {
    if !raw.sections.is_empty() {
        return raw.sections.clone();
    }

    let legacy: [(&str, &Option<Value>); 4] = [
        ("hero", &raw.hero),
        ("about", &raw.about),
        ("principal", &raw.principal),
        ("contact", &raw.contact),
    ];

    legacy
        .into_iter()
        .filter_map(|(section_type, data)| {
            data.as_ref().map(|data| {
                Section::from_parts(SectionId::new(section_type), section_type, data.clone())
            })
        })
        .collect()
}

/// Fill dynamic sections with the school's current notices and gallery.
fn attach_snapshot(kind: &mut SectionKind, school: &School) {
    match kind {
        SectionKind::DynamicNotices(data) => {
            data.notices = school.notices.iter().take(data.limit()).cloned().collect();
        }
        SectionKind::DynamicGallery(data) => {
            data.images = school.gallery.iter().take(data.limit()).cloned().collect();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{DEFAULT_PRIMARY, DEFAULT_SECONDARY},
        site::Notice,
    };

    fn site(json: &str) -> SiteConfig {
        SiteConfig::from_json(json).expect("parse")
    }

    #[test]
    fn test_missing_global_uses_defaults() {
        let normalized = normalize(&site("{}"), &School::new("Acme"));
        assert_eq!(normalized.theme, DEFAULT_THEME);
        assert_eq!(normalized.primary, DEFAULT_PRIMARY);
        assert_eq!(normalized.secondary, DEFAULT_SECONDARY);
        assert!(normalized.logo.is_none());
    }

    #[test]
    fn test_partial_colors_fall_back() {
        let raw = site(r##"{"global": {"colors": {"primary": "#123456"}}}"##);
        let normalized = normalize(&raw, &School::new("Acme"));
        assert_eq!(normalized.primary, "#123456");
        assert_eq!(normalized.secondary, DEFAULT_SECONDARY);
    }

    #[test]
    fn test_theme_config_fallbacks() {
        let theme = ThemeConfig {
            primary: "#000001".to_string(),
            ..ThemeConfig::default()
        };
        let normalized = normalize_with(&site("{}"), &School::new("Acme"), &theme);
        assert_eq!(normalized.primary, "#000001");
    }

    #[test]
    fn test_synthesizes_page_from_sections() {
        let raw = site(r#"{"sections": [{"id": 1, "type": "about"}]}"#);
        let normalized = normalize(&raw, &School::new("Acme"));
        assert_eq!(normalized.pages.len(), 1);
        assert_eq!(normalized.pages[0].slug, "/");
        assert_eq!(normalized.pages[0].title(), Some("Home"));
        assert_eq!(normalized.pages[0].sections.len(), 1);
    }

    #[test]
    fn test_empty_config_still_has_a_page() {
        let normalized = normalize(&site("{}"), &School::new("Acme"));
        assert_eq!(normalized.pages.len(), 1);
        assert!(normalized.pages[0].sections.is_empty());
    }

    #[test]
    fn test_legacy_keys_become_sections() {
        let raw = site(
            r#"{"contact": {"phone": "123"}, "hero": {"title": "Hi"}, "about": {"content": "Us"}}"#,
        );
        let normalized = normalize(&raw, &School::new("Acme"));
        let types: Vec<_> = normalized
            .sections()
            .map(|s| s.kind.type_name().to_string())
            .collect();
        assert_eq!(types, vec!["hero", "about", "contact"]);
        assert_eq!(normalized.pages[0].sections[0].id.as_str(), "hero");
    }

    #[test]
    fn test_pages_take_precedence_over_sections() {
        let raw = site(
            r#"{"pages": [{"slug": "/x", "sections": []}], "sections": [{"id": 1, "type": "about"}]}"#,
        );
        let normalized = normalize(&raw, &School::new("Acme"));
        assert_eq!(normalized.pages.len(), 1);
        assert_eq!(normalized.pages[0].slug, "/x");
    }

    #[test]
    fn test_missing_ids_are_assigned() {
        let raw = site(r#"{"sections": [{"type": "about"}, {"id": 7, "type": "about"}, {"type": "timeline"}]}"#);
        let normalized = normalize(&raw, &School::new("Acme"));
        let ids: Vec<_> = normalized.sections().map(|s| s.id.to_string()).collect();
        assert_eq!(ids, vec!["auto-1", "7", "auto-2"]);
    }

    #[test]
    fn test_source_config_not_mutated() {
        let raw = site(r#"{"pages": [{"slug": "/", "sections": [{"type": "about"}]}]}"#);
        let _ = normalize(&raw, &School::new("Acme"));
        assert!(raw.pages[0].sections[0].id.is_empty());
    }

    #[test]
    fn test_notices_snapshot_respects_limit() {
        let raw = site(r#"{"sections": [{"id": 1, "type": "dynamic_notices", "data": {"limit": 2}}]}"#);
        let mut school = School::new("Acme");
        school.notices = (1..=5)
            .map(|i| Notice {
                title: format!("Notice {i}"),
                ..Notice::default()
            })
            .collect();

        let normalized = normalize(&raw, &school);
        match &normalized.pages[0].sections[0].kind {
            SectionKind::DynamicNotices(data) => {
                assert_eq!(data.notices.len(), 2);
                assert_eq!(data.notices[0].title, "Notice 1");
            }
            other => panic!("expected notices, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_duplicate_filenames_detected() {
        let raw = site(r#"{"pages": [{"slug": "/about"}, {"slug": "about"}]}"#);
        let normalized = normalize(&raw, &School::new("Acme"));
        let err = normalized.check_filenames().unwrap_err();
        assert!(matches!(err, CoreError::DuplicateFilename { ref filename, .. } if filename == "about.html"));
    }

    #[test]
    fn test_distinct_filenames_pass() {
        let raw = site(r#"{"pages": [{"slug": "/"}, {"slug": "/contact"}]}"#);
        let normalized = normalize(&raw, &School::new("Acme"));
        assert!(normalized.check_filenames().is_ok());
    }
}
