//! Stylesheet compilation.
//!
//! The shared `style.css` is the web-font import, a `:root` block with the
//! theme variables, the fixed base stylesheet and finally every custom CSS
//! fragment of the site, in page-then-section order.

use schoolsite_core::{NormalizedSite, Section, config::ThemeConfig};
use tracing::debug;

/// Factor by which the primary color is darkened for `--primary-dark`.
const DARKEN_FACTOR: f32 = 0.15;

/// Compiles the site stylesheet.
#[derive(Debug, Clone)]
pub struct StyleCompiler {
    font_import: String,
}

impl Default for StyleCompiler {
    fn default() -> Self {
        Self::new(&ThemeConfig::default())
    }
}

impl StyleCompiler {
    /// Create a compiler using the given theme settings.
    #[must_use]
    pub fn new(theme: &ThemeConfig) -> Self {
        Self {
            font_import: theme.font_import.clone(),
        }
    }

    /// Compile the complete stylesheet for a site.
    #[must_use]
    pub fn compile(&self, site: &NormalizedSite) -> String {
        let mut custom = CustomCss::new();
        if let Some(css) = &site.custom_css {
            custom.push_global(css);
        }
        for section in site.sections() {
            custom.push_section(section);
        }
        debug!(fragments = custom.len(), "collected custom css");

        let mut css = String::with_capacity(BASE_STYLESHEET.len() + 1024);
        if !self.font_import.is_empty() {
            css.push_str(&format!(
                "@import url('{}');\n\n",
                self.font_import.replace(['\'', '\n'], "")
            ));
        }
        css.push_str(&root_variables(&site.primary, &site.secondary));
        css.push_str(BASE_STYLESHEET);

        if !custom.is_empty() {
            css.push_str("\n/* Custom CSS */\n");
            css.push_str(&custom.finish());
            css.push('\n');
        }
        css
    }
}

/// Ordered collection of custom CSS fragments, joined once.
#[derive(Debug, Clone, Default)]
pub struct CustomCss {
    fragments: Vec<String>,
}

impl CustomCss {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add site-wide CSS verbatim.
    pub fn push_global(&mut self, css: &str) {
        let css = css.trim();
        if !css.is_empty() {
            self.fragments.push(css.to_string());
        }
    }

    /// Add a section's custom CSS, scoped to the section's id selector.
    pub fn push_section(&mut self, section: &Section) {
        if let Some(css) = section.custom_css.as_deref() {
            let css = css.trim();
            if !css.is_empty() {
                self.fragments.push(scope_fragment(&section.id.selector(), css));
            }
        }
    }

    /// Number of collected fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Join all fragments in insertion order.
    #[must_use]
    pub fn finish(self) -> String {
        self.fragments.join("\n")
    }
}

/// Scope a CSS fragment to `selector`.
///
/// A fragment containing `&` is a template where every `&` becomes the
/// selector; anything else is wrapped in a single rule.
#[must_use]
pub fn scope_fragment(selector: &str, fragment: &str) -> String {
    if fragment.contains('&') {
        fragment.replace('&', selector)
    } else {
        format!("{selector} {{ {fragment} }}")
    }
}

/// Darken a hex color (`#rgb` or `#rrggbb`) by `factor`.
///
/// Any other color syntax is returned unchanged.
#[must_use]
pub fn darken(color: &str, factor: f32) -> String {
    let Some((r, g, b)) = parse_hex(color) else {
        return color.to_string();
    };
    let scale = |c: u8| -> u8 { (f32::from(c) * (1.0 - factor)).round().clamp(0.0, 255.0) as u8 };
    format!("#{:02x}{:02x}{:02x}", scale(r), scale(g), scale(b))
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d << 4 | d);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

fn root_variables(primary: &str, secondary: &str) -> String {
    format!(
        r#":root {{
    --primary: {primary};
    --primary-dark: {primary_dark};
    --secondary: {secondary};
    --background: #ffffff;
    --text: #0f172a;
    --muted: #f1f5f9;
    --border: #e2e8f0;
    --radius: 0.75rem;
}}
"#,
        primary_dark = darken(primary, DARKEN_FACTOR),
    )
}

/// Fixed base stylesheet shared by every generated site.
pub const BASE_STYLESHEET: &str = r#"
/* Reset */
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; }
body { font-family: 'Inter', system-ui, -apple-system, sans-serif; color: var(--text); background: var(--background); line-height: 1.6; opacity: 0; transition: opacity 0.4s ease; }
body.loaded { opacity: 1; }
img { max-width: 100%; height: auto; display: block; }
a { color: var(--primary); }

/* Typography */
h1, h2, h3, h4, h5, h6 { line-height: 1.2; font-weight: 700; color: inherit; }
h1 { font-size: 3rem; }
h2 { font-size: 2.25rem; }
h3 { font-size: 1.5rem; }
h4 { font-size: 1.25rem; }
h5 { font-size: 1.125rem; }
h6 { font-size: 1rem; }
p { margin-bottom: 1rem; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1rem; }
section { padding: 5rem 0; }
.section-title { font-size: 2.25rem; text-align: center; margin-bottom: 1rem; color: var(--secondary); }
.section-subtitle { text-align: center; color: #64748b; max-width: 700px; margin: 0 auto 3rem; }
.section-title + :not(.section-subtitle) { margin-top: 2rem; }

/* Header */
.site-header { background: #ffffff; border-bottom: 1px solid var(--border); position: sticky; top: 0; z-index: 50; }
.site-nav { display: flex; justify-content: space-between; align-items: center; min-height: 4rem; gap: 1rem; }
.logo { font-weight: 700; font-size: 1.25rem; display: flex; align-items: center; gap: 0.5rem; text-decoration: none; color: var(--secondary); }
.logo img { height: 2.5rem; width: auto; }
.nav-links { display: flex; flex-wrap: wrap; gap: 2rem; }
.nav-links a { text-decoration: none; color: var(--secondary); font-weight: 500; }
.nav-links a:hover { color: var(--primary); }
.site-header.menu-center .site-nav { flex-direction: column; justify-content: center; padding: 1rem 0; }
.site-header.menu-center .nav-links { justify-content: center; }

/* Buttons */
.btn { display: inline-block; background: #ffffff; color: var(--primary); padding: 0.875rem 2rem; border-radius: 0.5rem; text-decoration: none; font-weight: 600; border: 2px solid transparent; transition: all 0.3s; box-shadow: 0 4px 14px rgba(0, 0, 0, 0.1); cursor: pointer; }
.btn:hover { transform: translateY(-2px); box-shadow: 0 6px 20px rgba(0, 0, 0, 0.15); }
.btn-primary { background: var(--primary); color: #ffffff; }
.btn-primary:hover { background: var(--primary-dark); }
.btn-outline { background: transparent; border-color: var(--primary); color: var(--primary); box-shadow: none; }
.btn-outline:hover { background: var(--primary); color: #ffffff; }

/* Legacy hero */
.hero { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 6rem 1rem; text-align: center; color: #ffffff; }
.hero-title { font-size: 3.5rem; margin-bottom: 1rem; font-weight: 800; line-height: 1.1; }
.hero-subtitle { font-size: 1.5rem; margin-bottom: 2rem; opacity: 0.95; font-weight: 300; }
.hero-btn { background: #ff6b6b; color: #ffffff; }
.hero-btn:hover { background: #ee5a52; }
.hero-img { margin: 3rem auto 0; border-radius: 1rem; box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3); }

/* Hero slider */
.hero-slider { padding: 0; }
.slider { position: relative; height: 600px; overflow: hidden; background: var(--secondary); }
.slide { position: absolute; inset: 0; background-size: cover; background-position: center; opacity: 0; transition: opacity 0.8s ease; display: flex; align-items: center; }
.slide.active { opacity: 1; z-index: 1; }
.slide-overlay { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.45); }
.slide-content { position: relative; z-index: 2; color: #ffffff; text-align: center; width: 100%; }
.slide-title { font-size: 3.25rem; margin-bottom: 1rem; }
.slide-subtitle { font-size: 1.35rem; margin-bottom: 2rem; opacity: 0.95; }
.slider-arrow { position: absolute; top: 50%; transform: translateY(-50%); z-index: 3; background: rgba(255, 255, 255, 0.25); color: #ffffff; border: none; width: 3rem; height: 3rem; border-radius: 50%; font-size: 1.25rem; cursor: pointer; }
.slider-arrow:hover { background: rgba(255, 255, 255, 0.45); }
.slider-arrow.prev { left: 1.5rem; }
.slider-arrow.next { right: 1.5rem; }
.slider-dots { position: absolute; bottom: 1.5rem; left: 0; right: 0; display: flex; justify-content: center; gap: 0.5rem; z-index: 3; }
.slider-dot { width: 0.75rem; height: 0.75rem; border-radius: 50%; border: none; background: rgba(255, 255, 255, 0.5); cursor: pointer; }
.slider-dot.active { background: #ffffff; }

/* Hero simple */
.hero-simple { padding: 0; }
.hero-simple-inner { position: relative; min-height: 500px; display: flex; align-items: center; background-size: cover; background-position: center; background-color: var(--secondary); }
.hero-simple.overlay-light .slide-overlay { background: rgba(255, 255, 255, 0.55); }
.hero-simple.overlay-light .slide-content { color: var(--text); }
.hero-simple.overlay-none .slide-overlay { display: none; }

/* Hero split */
.hero-split { background: var(--muted); }
.hero-split-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center; }
.hero-split-image img { width: 100%; border-radius: var(--radius); box-shadow: 0 20px 50px rgba(0, 0, 0, 0.15); }
.hero-split-text h1 { font-size: 3rem; margin-bottom: 1rem; color: var(--secondary); }
.hero-split-subtitle { font-size: 1.25rem; color: var(--primary); font-weight: 600; }
.hero-split.image-right .hero-split-image { order: 2; }

/* Image and text */
.content-image-text { background: #ffffff; }
.image-text-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center; }
.image-text-image img { width: 100%; border-radius: var(--radius); }
.image-text-body h2 { margin-bottom: 1.5rem; color: var(--secondary); }
.image-text-content { color: #475569; margin-bottom: 1.5rem; }
.content-image-text.image-right .image-text-grid { direction: rtl; }
.content-image-text.image-right .image-text-grid > * { direction: ltr; }

/* Cards and features */
.content-cards { background: #ffffff; }
.card-grid { display: grid; gap: 2rem; }
.card-grid.cols-2 { grid-template-columns: repeat(2, 1fr); }
.card-grid.cols-3 { grid-template-columns: repeat(3, 1fr); }
.card-grid.cols-4 { grid-template-columns: repeat(4, 1fr); }
.card { padding: 2rem; border-radius: var(--radius); background: #ffffff; text-align: center; transition: all 0.3s; }
.card-grid.elevated .card { box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08); }
.card-grid.elevated .card:hover { transform: translateY(-5px); box-shadow: 0 16px 40px rgba(0, 0, 0, 0.12); }
.card-grid.flat .card { border: 1px solid var(--border); }
.card-grid.flat .card:hover { border-color: var(--primary); }
.card-icon { font-size: 2.5rem; margin-bottom: 1rem; }
.card-title { font-size: 1.25rem; margin-bottom: 0.5rem; color: var(--secondary); }
.card-description { color: #64748b; }
.card-link { font-weight: 600; text-decoration: none; }
.content-features { background: var(--muted); }
.content-features .card { text-align: left; }

/* Stats */
.content-stats { background: var(--primary); color: #ffffff; }
.content-stats .section-title { color: #ffffff; }
.stats-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; text-align: center; }
.stat-number { font-size: 3rem; font-weight: 800; }
.stat-label { font-size: 1rem; opacity: 0.9; text-transform: uppercase; letter-spacing: 0.05em; }

/* Messages */
.message-profile { background: #ffffff; }
.profile-grid { display: grid; grid-template-columns: 300px 1fr; gap: 4rem; align-items: center; max-width: 1000px; margin: 0 auto; }
.message-profile.layout-right .profile-photo { order: 2; }
.profile-photo img { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: 50%; border: 5px solid #ffffff; box-shadow: 0 10px 40px rgba(0, 0, 0, 0.1); }
.profile-message { font-size: 1.125rem; line-height: 1.8; color: #475569; font-style: italic; margin-bottom: 1.5rem; }
.profile-name { font-size: 1.5rem; font-weight: 700; color: var(--primary); margin-bottom: 0; }
.profile-designation { color: #64748b; }
.message-quote { background: var(--muted); text-align: center; }
.quote-text { font-size: 1.75rem; font-style: italic; max-width: 850px; margin: 0 auto 2rem; color: var(--secondary); }
.quote-author { display: flex; align-items: center; justify-content: center; gap: 1rem; }
.quote-photo { width: 4rem; height: 4rem; border-radius: 50%; object-fit: cover; }
.quote-name { font-weight: 700; margin-bottom: 0; }
.quote-designation { color: #64748b; font-size: 0.9rem; margin-bottom: 0; }

/* Galleries */
.gallery-grid { background: #ffffff; }
.gallery-masonry { background: var(--muted); }
.gallery-items { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; }
.gallery-item { position: relative; overflow: hidden; border-radius: 0.5rem; aspect-ratio: 4 / 3; }
.gallery-item img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s; }
.gallery-item:hover img { transform: scale(1.08); }
.gallery-caption { position: absolute; inset: auto 0 0 0; padding: 1rem; color: #ffffff; background: linear-gradient(transparent, rgba(0, 0, 0, 0.7)); opacity: 0; transition: opacity 0.3s; }
.gallery-item:hover .gallery-caption { opacity: 1; }
.masonry { column-count: 4; column-gap: 16px; }
.masonry-item { break-inside: avoid; margin-bottom: 16px; border-radius: 0.5rem; overflow: hidden; }
.masonry-item img { width: 100%; }

/* Video */
.video-section { background: #ffffff; }
.video-wrapper { position: relative; width: 100%; max-width: 960px; margin: 0 auto; aspect-ratio: 16 / 9; border-radius: var(--radius); overflow: hidden; box-shadow: 0 20px 50px rgba(0, 0, 0, 0.15); }
.video-wrapper iframe { position: absolute; inset: 0; width: 100%; height: 100%; border: 0; }
.video-description { text-align: center; color: #64748b; max-width: 700px; margin: 0 auto 2rem; }

/* Tabs */
.tabs-content { background: #ffffff; }
.tab-buttons { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.5rem; margin-bottom: 2rem; border-bottom: 2px solid var(--border); }
.tab-button { background: none; border: none; padding: 0.75rem 1.5rem; font: inherit; font-weight: 600; color: #64748b; cursor: pointer; border-bottom: 3px solid transparent; margin-bottom: -2px; }
.tab-button.active { color: var(--primary); border-bottom-color: var(--primary); }
.tab-panel { display: none; max-width: 900px; margin: 0 auto; }
.tab-panel.active { display: block; }

/* Accordion */
.accordion { background: var(--muted); }
.accordion-items { max-width: 900px; margin: 0 auto; }
.accordion-item { border: 1px solid var(--border); border-radius: 0.5rem; margin-bottom: 0.75rem; overflow: hidden; background: #ffffff; }
.accordion-header { width: 100%; text-align: left; background: none; border: none; padding: 1.25rem 1.5rem; font: inherit; font-weight: 600; cursor: pointer; display: flex; justify-content: space-between; align-items: center; color: var(--secondary); }
.accordion-header::after { content: '+'; font-size: 1.5rem; color: var(--primary); }
.accordion-item.active .accordion-header::after { content: '\2212'; }
.accordion-content { display: none; padding: 0 1.5rem 1.25rem; color: #475569; }
.accordion-item.active .accordion-content { display: block; }

/* Timeline */
.timeline { background: #ffffff; }
.timeline-items { position: relative; max-width: 800px; margin: 0 auto; padding-left: 2.5rem; }
.timeline-items::before { content: ''; position: absolute; left: 0.75rem; top: 0; bottom: 0; width: 2px; background: var(--border); }
.timeline-item { position: relative; margin-bottom: 2.5rem; }
.timeline-dot { position: absolute; left: -2.25rem; top: 0.35rem; width: 1rem; height: 1rem; border-radius: 50%; background: var(--primary); border: 3px solid #ffffff; box-shadow: 0 0 0 2px var(--primary); }
.timeline-year { font-weight: 800; color: var(--primary); }
.timeline-title { font-size: 1.25rem; margin: 0.25rem 0 0.5rem; color: var(--secondary); }
.timeline-description { color: #64748b; }

/* Legacy about, principal and contact */
.about { background: #ffffff; }
.about-content { max-width: 800px; margin: 0 auto; font-size: 1.125rem; line-height: 1.8; color: #4a5568; }
.principal { background: var(--muted); }
.principal-grid { display: grid; grid-template-columns: 300px 1fr; gap: 4rem; align-items: center; max-width: 1000px; margin: 0 auto; }
.principal-img { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: 50%; border: 5px solid #ffffff; box-shadow: 0 10px 40px rgba(0, 0, 0, 0.1); }
.principal-placeholder { background: #cbd5e1; height: 300px; border-radius: 0.5rem; }
.principal-name { font-size: 1.5rem; margin-bottom: 1rem; color: var(--primary); }
.principal-message { font-size: 1.125rem; line-height: 1.8; color: #4a5568; font-style: italic; }
.contact { background: var(--secondary); color: #ffffff; }
.contact .section-title { color: #ffffff; }
.contact-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 3rem; text-align: center; margin-top: 2rem; }
.contact-item { padding: 2rem; background: rgba(255, 255, 255, 0.05); border-radius: var(--radius); transition: all 0.3s; }
.contact-item:hover { background: rgba(255, 255, 255, 0.1); transform: translateY(-3px); }
.contact-item h3 { margin-bottom: 0.75rem; color: #94a3b8; text-transform: uppercase; font-size: 0.875rem; letter-spacing: 0.05em; }

/* Notices and dynamic gallery */
.notices { background: var(--muted); }
.notice-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-top: 2rem; }
.notice-card { background: #ffffff; padding: 1.5rem; border-radius: var(--radius); border: 1px solid var(--border); }
.notice-date { font-size: 0.875rem; color: #64748b; margin-bottom: 0.5rem; }
.notice-title { font-size: 1.25rem; margin-bottom: 0.5rem; color: var(--secondary); }
.notice-description { color: #475569; }
.notice-link { font-size: 0.875rem; font-weight: 600; text-decoration: none; }
.dynamic-gallery { background: #ffffff; }
.dynamic-gallery .gallery-items { grid-template-columns: repeat(3, 1fr); margin-top: 2rem; }
.empty-state { text-align: center; color: #64748b; padding: 3rem 1rem; border: 1px dashed var(--border); border-radius: var(--radius); background: #ffffff; margin-top: 2rem; }
.view-all { text-align: center; margin-top: 3rem; }

/* Custom layout */
.custom-layout { background: #ffffff; }
.layout-row { display: flex; flex-wrap: wrap; margin: 0 -1rem 2rem; }
.layout-row:last-child { margin-bottom: 0; }
.layout-column { padding: 0 1rem; }
.widget-text { white-space: pre-wrap; }
.widget-image { width: 100%; border-radius: 0.5rem; }

/* Footer */
.site-footer { background: #0f172a; color: #94a3b8; padding: 2rem 0; text-align: center; border-top: 1px solid #1e293b; }
.site-footer p { margin-bottom: 0; }

/* Lazy images */
img[data-src] { opacity: 0; transition: opacity 0.4s; }
img.lazy-loaded { opacity: 1; }

/* Mobile */
@media (max-width: 768px) {
    h1, .hero-title, .slide-title { font-size: 2.25rem; }
    .section-title { font-size: 1.75rem; }
    section { padding: 3.5rem 0; }
    .site-nav { flex-direction: column; padding: 1rem 0; }
    .nav-links { justify-content: center; gap: 1rem; }
    .slider { height: 420px; }
    .hero-split-grid, .image-text-grid, .profile-grid, .principal-grid, .contact-grid, .notice-grid { grid-template-columns: 1fr; gap: 2rem; }
    .card-grid.cols-2, .card-grid.cols-3, .card-grid.cols-4 { grid-template-columns: 1fr; }
    .stats-grid { grid-template-columns: repeat(2, 1fr); }
    .gallery-items, .dynamic-gallery .gallery-items { grid-template-columns: repeat(2, 1fr) !important; }
    .masonry { column-count: 2 !important; }
    .hero-split.image-right .hero-split-image, .message-profile.layout-right .profile-photo { order: 0; }
    .content-image-text.image-right .image-text-grid { direction: ltr; }
    .layout-column { width: 100% !important; margin-bottom: 1rem; }
}
"#;

#[cfg(test)]
mod tests {
    use schoolsite_core::{School, SiteConfig, normalize};

    use super::*;

    fn compile(json: &str) -> String {
        let site = normalize(&SiteConfig::from_json(json).unwrap(), &School::new("Acme"));
        StyleCompiler::default().compile(&site)
    }

    #[test]
    fn test_plain_fragment_is_wrapped() {
        assert_eq!(scope_fragment("#section-42", "color: red;"), "#section-42 { color: red; }");
    }

    #[test]
    fn test_ampersand_fragment_is_substituted() {
        assert_eq!(
            scope_fragment("#section-7", "& h2 { color: red; }\n&:hover { opacity: 1; }"),
            "#section-7 h2 { color: red; }\n#section-7:hover { opacity: 1; }"
        );
    }

    #[test]
    fn test_section_css_scoped_by_id() {
        let css = compile(
            r#"{"pages": [{"slug": "/", "sections": [{"id": 42, "type": "about", "customCss": "color: red;"}]}]}"#,
        );
        assert!(css.contains("#section-42 { color: red; }"));
    }

    #[test]
    fn test_custom_css_order() {
        let css = compile(
            r#"{
                "global": {"customCss": "body { margin: 0; }"},
                "pages": [
                    {"slug": "/", "sections": [{"id": 1, "type": "about", "customCss": "color: red;"}]},
                    {"slug": "/b", "sections": [{"id": 2, "type": "about", "customCss": "color: blue;"}]}
                ]
            }"#,
        );
        let global = css.find("body { margin: 0; }").unwrap();
        let first = css.find("#section-1 { color: red; }").unwrap();
        let second = css.find("#section-2 { color: blue; }").unwrap();
        let base = css.find("/* Reset */").unwrap();
        assert!(base < global && global < first && first < second);
    }

    #[test]
    fn test_root_variables() {
        let css = compile(r##"{"global": {"colors": {"primary": "#ff0000", "secondary": "#00ff00"}}}"##);
        assert!(css.contains("--primary: #ff0000;"));
        assert!(css.contains("--secondary: #00ff00;"));
        assert!(css.contains("--primary-dark: #d90000;"));
    }

    #[test]
    fn test_font_import_comes_first() {
        let css = compile("{}");
        assert!(css.starts_with("@import url('"));
        assert_eq!(css.matches("@import").count(), 1);
    }

    #[test]
    fn test_darken() {
        assert_eq!(darken("#ffffff", 0.5), "#808080");
        assert_eq!(darken("#fff", 0.0), "#ffffff");
        assert_eq!(darken("rebeccapurple", 0.2), "rebeccapurple");
        assert_eq!(darken("#12345", 0.2), "#12345");
        assert_eq!(darken("#gggggg", 0.2), "#gggggg");
    }

    #[test]
    fn test_base_stylesheet_covers_section_classes() {
        for class in [
            "hero",
            "hero-slider",
            "hero-simple",
            "hero-split",
            "content-image-text",
            "content-cards",
            "content-features",
            "content-stats",
            "message-profile",
            "message-quote",
            "gallery-grid",
            "gallery-masonry",
            "video-section",
            "tabs-content",
            "accordion",
            "timeline",
            "custom-layout",
            "about",
            "principal",
            "contact",
            "notices",
            "dynamic-gallery",
        ] {
            let rule = format!("\n.{class} {{");
            assert!(BASE_STYLESHEET.contains(&rule), "no section rule for .{class}");
        }

        for selector in [
            ".card-grid.cols-2",
            ".card-grid.cols-3",
            ".card-grid.cols-4",
            "@media (max-width: 768px)",
        ] {
            assert!(BASE_STYLESHEET.contains(selector), "missing {selector}");
        }
    }
}
