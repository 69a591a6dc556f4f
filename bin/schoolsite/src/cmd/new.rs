//! New command - write a starter site configuration

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr, bail};
use serde_json::{Value, json};

/// Run the new command.
///
/// Writes a one-page starter configuration to `path`. An existing file is
/// only replaced when `force` is set.
pub fn run(path: &Path, force: bool) -> Result<()> {
    tracing::info!(?path, force, "Creating starter site");

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).wrap_err("Failed to create directories")?;
    }

    let content = serde_json::to_string_pretty(&starter_site())?;
    fs::write(path, content + "\n").wrap_err("Failed to write file")?;

    tracing::info!(?path, "Created starter site");
    println!("Created: {}", path.display());

    Ok(())
}

fn starter_site() -> Value {
    json!({
        "global": {
            "theme": "modern-white",
            "colors": {
                "primary": "#2563eb",
                "secondary": "#1e293b"
            },
            "header": {
                "links": [
                    { "label": "Home", "url": "/", "target": "page" },
                    { "label": "About", "url": "#section-about", "target": "section" }
                ]
            },
            "footer": {}
        },
        "pages": [
            {
                "slug": "/",
                "name": "Home",
                "sections": [
                    {
                        "id": "welcome",
                        "type": "hero-slider",
                        "data": {
                            "slides": [
                                { "title": "Welcome", "subtitle": "Learning for life" },
                                { "title": "Admissions open", "subtitle": "Apply for the new session" }
                            ],
                            "autoplay": true,
                            "interval": 5000,
                            "showArrows": true,
                            "showDots": true
                        }
                    },
                    {
                        "id": "about",
                        "type": "about",
                        "data": {
                            "title": "About Us",
                            "content": "Tell visitors about your school."
                        }
                    }
                ]
            }
        ]
    })
}
