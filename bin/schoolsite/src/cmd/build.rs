//! Build command - generates the website archive

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use color_eyre::eyre::{Result, WrapErr, eyre};
use schoolsite_core::{School, SiteConfig};
use schoolsite_generator::Builder;

/// Run the build command.
///
/// Reads the site configuration and school record, generates the site and
/// writes the archive to `output` (or `build.archive_name`).
pub async fn run(
    config_path: &Path,
    site_path: &Path,
    school_path: &Path,
    output: Option<&Path>,
    year: Option<i32>,
) -> Result<()> {
    tracing::info!(?config_path, ?site_path, ?school_path, ?output, ?year, "Starting build");

    let config = super::load_settings(config_path)?;
    tracing::debug!(?config, "Loaded settings");

    let site = SiteConfig::load(site_path).wrap_err("Failed to load site configuration")?;
    let school = School::load(school_path).wrap_err("Failed to load school record")?;

    let output: PathBuf = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.build.archive_name));
    let now = build_time(year)?;

    let builder = Builder::new(config, now);
    let archive = tokio::task::spawn_blocking(move || builder.generate(&site, &school))
        .await
        .wrap_err("Build task panicked")?
        .wrap_err("Build failed")?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
    }
    tokio::fs::write(&output, &archive.bytes)
        .await
        .wrap_err_with(|| format!("Failed to write {}", output.display()))?;

    let stats = &archive.stats;
    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Pages:      {}", stats.pages);
    println!("  Sections:   {}", stats.sections);
    println!("  Skipped:    {}", stats.skipped_sections);
    println!("  Files:      {}", archive.files.len());
    println!("  Size:       {} bytes", stats.archive_bytes);
    println!();
    println!("  Duration:   {} ms", stats.duration_ms);
    println!("  Output:     {}", output.display());
    println!();

    tracing::info!(?stats, output = %output.display(), "Build completed successfully");

    Ok(())
}

/// Timestamp the site is generated at: January 1st of `year`, or now.
fn build_time(year: Option<i32>) -> Result<DateTime<Utc>> {
    match year {
        Some(year) => Utc
            .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| eyre!("Invalid year: {year}")),
        None => Ok(Utc::now()),
    }
}
