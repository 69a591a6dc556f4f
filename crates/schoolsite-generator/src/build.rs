//! Build orchestration.
//!
//! Normalizes a site configuration, renders every page, compiles the shared
//! stylesheet and script and packages everything into one archive.

use std::time::Instant;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use schoolsite_core::{Config, CoreError, School, SiteConfig, normalize_with};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    archive::{self, ArchiveError, SiteFile},
    css::StyleCompiler,
    html::{HtmlError, HtmlGenerator, RenderedPage},
    script::BEHAVIOR_SCRIPT,
};

/// Name of the shared stylesheet inside the archive.
pub const STYLESHEET_NAME: &str = "style.css";

/// Name of the shared behavior script inside the archive.
pub const SCRIPT_NAME: &str = "script.js";

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Invalid site configuration.
    #[error("configuration error: {0}")]
    Core(#[from] CoreError),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// Archive packaging error.
    #[error("archive error: {0}")]
    Archive(#[from] ArchiveError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of pages generated.
    pub pages: usize,

    /// Number of sections rendered.
    pub sections: usize,

    /// Number of sections of unknown type that were dropped.
    pub skipped_sections: usize,

    /// Size of the packaged archive.
    pub archive_bytes: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// The generated site: its files in archive order and the packaged bytes.
#[derive(Debug, Clone)]
pub struct SiteArchive {
    /// Pages in page order, then the stylesheet, then the script.
    pub files: Vec<SiteFile>,
    /// Zip archive of `files`.
    pub bytes: Vec<u8>,
    /// Statistics of the build that produced this archive.
    pub stats: BuildStats,
}

impl SiteArchive {
    /// Look up a generated file by name.
    #[must_use]
    pub fn file(&self, name: &str) -> Option<&SiteFile> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Names of all generated files in archive order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.name.as_str())
    }
}

/// Site builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    now: DateTime<Utc>,
}

impl Builder {
    /// Create a new builder.
    ///
    /// `now` is the only source of time in the output (the default footer's
    /// copyright year).
    #[must_use]
    pub fn new(config: Config, now: DateTime<Utc>) -> Self {
        Self { config, now }
    }

    /// Generate and package a site.
    pub fn generate(&self, raw: &SiteConfig, school: &School) -> Result<SiteArchive> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(school = %school.name, parallel = self.config.build.parallel, "starting build");

        // 1. Normalize
        let site = normalize_with(raw, school, &self.config.theme);
        site.check_filenames()?;

        // 2. Render pages
        let generator = HtmlGenerator::new(self.now).with_minify(self.config.build.minify);
        let shell = generator.render_shell(&site, school)?;

        info!(count = site.pages.len(), "generating HTML pages");
        let pages: Vec<RenderedPage> = if self.config.build.parallel {
            site.pages
                .par_iter()
                .map(|page| generator.generate_page(&shell, page))
                .collect::<std::result::Result<_, _>>()?
        } else {
            site.pages
                .iter()
                .map(|page| generator.generate_page(&shell, page))
                .collect::<std::result::Result<_, _>>()?
        };

        let mut files = Vec::with_capacity(pages.len() + 2);
        for page in pages {
            debug!(filename = %page.filename, bytes = page.html.len(), "rendered page");
            stats.pages += 1;
            stats.sections += page.sections_rendered;
            stats.skipped_sections += page.sections_skipped;
            files.push(SiteFile::new(page.filename, page.html));
        }

        // 3. Shared assets
        let css = StyleCompiler::new(&self.config.theme).compile(&site);
        files.push(SiteFile::new(STYLESHEET_NAME, css));
        files.push(SiteFile::new(SCRIPT_NAME, BEHAVIOR_SCRIPT));

        // 4. Package
        let bytes = archive::package(&files)?;
        stats.archive_bytes = bytes.len();
        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            pages = stats.pages,
            sections = stats.sections,
            skipped_sections = stats.skipped_sections,
            archive_bytes = stats.archive_bytes,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(SiteArchive {
            files,
            bytes,
            stats,
        })
    }
}
