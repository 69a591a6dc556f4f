//! Check command - validate settings and a site configuration

use std::{collections::HashSet, path::Path};

use color_eyre::eyre::{Result, bail};
use schoolsite_core::{LinkTarget, School, SiteConfig, normalize, resolve_link};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the generator settings and the site configuration.
pub fn run(config_path: &Path, site_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, ?site_path, strict, "Checking settings and site");

    let mut result = ValidationResult::default();

    println!("Checking settings...");
    match super::load_settings(config_path) {
        Ok(_) => println!("  ✓ Settings valid"),
        Err(e) => {
            result.add_error(format!("Settings error: {e}"));
            println!("  ✗ Settings invalid: {e}");
        }
    }

    println!("\nChecking site configuration...");
    match SiteConfig::load(site_path) {
        Ok(site) => {
            let before = result.errors.len() + result.warnings.len();
            validate_site(&site, &mut result);
            if result.errors.len() + result.warnings.len() == before {
                println!("  ✓ Site configuration valid");
            }
        }
        Err(e) => {
            result.add_error(format!("{}: {e}", site_path.display()));
            println!("  ✗ Site configuration unreadable: {e}");
        }
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Check a site configuration the way the builder will see it.
fn validate_site(site: &SiteConfig, result: &mut ValidationResult) {
    let normalized = normalize(site, &School::new(""));

    if let Err(e) = normalized.check_filenames() {
        result.add_error(e.to_string());
    }

    let files: HashSet<String> = normalized.pages.iter().map(|p| p.filename()).collect();
    for page in &normalized.pages {
        if page.sections.is_empty() {
            result.add_warning(format!("Page '{}' has no sections", page.slug));
        }
    }

    let mut ids = HashSet::new();
    for page in &normalized.pages {
        for section in &page.sections {
            if section.kind.is_unknown() {
                result.add_warning(format!(
                    "Page '{}': section '{}' has unknown type '{}' and will be skipped",
                    page.slug,
                    section.id,
                    section.kind.type_name()
                ));
            }
            if !ids.insert(section.id.as_str()) {
                result.add_warning(format!(
                    "Section id '{}' is used more than once; its custom CSS applies to every copy",
                    section.id
                ));
            }
        }
    }

    for link in &normalized.header.links {
        if link.target != Some(LinkTarget::Page) {
            continue;
        }
        let href = resolve_link(link.url.as_deref(), link.target);
        if href != "#" && !files.contains(&href) {
            result.add_warning(format!(
                "Menu link '{}' points to {href}, which no page produces",
                link.label
            ));
        }
    }

    tracing::debug!(
        pages = normalized.pages.len(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "Validated site"
    );
}
