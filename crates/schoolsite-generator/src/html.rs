//! HTML page assembly.
//!
//! Wraps the rendered sections of each page in the shared header and footer
//! and the document shell from the [`TemplateRegistry`].

use chrono::{DateTime, Datelike, Utc};
use schoolsite_core::{NormalizedSite, Page, School, resolve_link};
use thiserror::Error;
use tracing::debug;

use crate::{
    escape::{escape, escape_attr, escape_multiline},
    render::render_section,
    template::{Template, TemplateContext, TemplateError, TemplateRegistry},
};

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// Header and footer markup shared by every page of a site.
#[derive(Debug, Clone)]
pub struct PageShell {
    school_name: String,
    header: String,
    footer: String,
}

/// One generated HTML document.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Output file name.
    pub filename: String,
    /// Complete document.
    pub html: String,
    /// Sections that produced markup.
    pub sections_rendered: usize,
    /// Sections of unknown type that were dropped.
    pub sections_skipped: usize,
}

/// HTML page generator.
#[derive(Debug)]
pub struct HtmlGenerator {
    templates: TemplateRegistry,
    year: i32,
    minify: bool,
}

impl HtmlGenerator {
    /// Create a generator. `now` supplies the year of the default footer.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            year: now.year(),
            minify: false,
        }
    }

    /// Strip indentation and blank lines from generated documents.
    #[must_use]
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Register a custom template, replacing a built-in one of the same name.
    pub fn register_template(&mut self, template: Template) {
        self.templates.register(template);
    }

    /// Render the header and footer for a site.
    pub fn render_shell(&self, site: &NormalizedSite, school: &School) -> Result<PageShell> {
        let logo = site
            .logo
            .as_deref()
            .or(school.profile_picture.as_deref())
            .filter(|url| !url.trim().is_empty())
            .map(|url| {
                format!(
                    r#"<img src="{}" alt="{} logo">"#,
                    escape_attr(url),
                    escape_attr(&school.name)
                )
            })
            .unwrap_or_default();

        let nav_links = site
            .header
            .links
            .iter()
            .map(|link| {
                format!(
                    r#"<a href="{}">{}</a>"#,
                    escape_attr(&resolve_link(link.url.as_deref(), link.target)),
                    escape(&link.label)
                )
            })
            .collect::<Vec<_>>()
            .join("\n                    ");

        let mut header_ctx = TemplateContext::new()
            .with_var("school_name", escape(&school.name))
            .with_var("logo", logo)
            .with_var("nav_links", nav_links);
        if site.header.is_centered() {
            header_ctx.insert("header_class", " menu-center");
        }
        if let Some(style) = background_style(site.header.bg_color.as_deref()) {
            header_ctx.insert("header_style", style);
        }

        let footer_text = match site.footer.text.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(text) => escape_multiline(text),
            None => format!("© {} {}. All rights reserved.", self.year, escape(&school.name)),
        };
        let mut footer_ctx = TemplateContext::new().with_var("footer_text", footer_text);
        if let Some(style) = background_style(site.footer.bg_color.as_deref()) {
            footer_ctx.insert("footer_style", style);
        }

        Ok(PageShell {
            school_name: school.name.clone(),
            header: self.templates.render("header", &header_ctx)?,
            footer: self.templates.render("footer", &footer_ctx)?,
        })
    }

    /// Generate the complete document for a page.
    pub fn generate_page(&self, shell: &PageShell, page: &Page) -> Result<RenderedPage> {
        let filename = page.filename();
        debug!(slug = %page.slug, filename = %filename, "generating HTML for page");

        let mut content = String::new();
        let mut sections_rendered = 0;
        let mut sections_skipped = 0;
        for section in &page.sections {
            let html = render_section(section);
            if html.is_empty() {
                sections_skipped += 1;
            } else {
                sections_rendered += 1;
                content.push_str(&html);
            }
        }

        let ctx = TemplateContext::new()
            .with_var("lang", "en")
            .with_var("title", escape(&page_title(&shell.school_name, page)))
            .with_var("header", shell.header.as_str())
            .with_var("content", content.trim_end())
            .with_var("footer", shell.footer.as_str());
        let html = self.templates.render("page", &ctx)?;

        Ok(RenderedPage {
            filename,
            html: if self.minify { minify(&html) } else { html },
            sections_rendered,
            sections_skipped,
        })
    }
}

/// Document title: `"<school> - <page>"`, or just the school name when the
/// page has no name.
#[must_use]
pub fn page_title(school_name: &str, page: &Page) -> String {
    match page.title() {
        Some(name) => format!("{school_name} - {name}"),
        None => school_name.to_string(),
    }
}

fn background_style(color: Option<&str>) -> Option<String> {
    color
        .filter(|c| !c.trim().is_empty())
        .map(|c| format!(r#" style="background: {};""#, escape_attr(c.trim())))
}

/// Drop leading indentation and blank lines.
#[must_use]
pub fn minify(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    for line in html.lines().map(str::trim_start).filter(|l| !l.is_empty()) {
        out.push_str(line);
        out.push('\n');
    }
    out
}
