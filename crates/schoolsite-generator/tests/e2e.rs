//! End-to-end tests for schoolsite.
//!
//! These tests drive the public builder and read the produced archive back.

use std::{
    io::{Cursor, Read},
    path::Path,
};

use chrono::{DateTime, TimeZone, Utc};
use schoolsite_core::{Config, CoreError, School, SiteConfig};
use schoolsite_generator::{BuildError, Builder, generate_website};
use zip::ZipArchive;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
}

fn unzip(bytes: &[u8]) -> Vec<(String, String)> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    (0..archive.len())
        .map(|i| {
            let mut entry = archive.by_index(i).expect("entry");
            let mut contents = String::new();
            entry.read_to_string(&mut contents).expect("utf-8 entry");
            (entry.name().to_string(), contents)
        })
        .collect()
}

fn file<'a>(files: &'a [(String, String)], name: &str) -> &'a str {
    files
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, c)| c.as_str())
        .unwrap_or_else(|| panic!("{name} missing from archive"))
}

#[test]
fn test_minimal_site() {
    let site = SiteConfig::from_json(
        r#"{"pages": [{"slug": "/", "sections": [{"id": 1, "type": "hero", "data": {"title": "Welcome"}}]}]}"#,
    )
    .unwrap();
    let bytes = generate_website(&site, &School::new("Acme School"), now()).unwrap();
    let files = unzip(&bytes);

    let names: Vec<_> = files.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["index.html", "style.css", "script.js"]);

    let index = file(&files, "index.html");
    assert!(index.contains("<title>Acme School</title>"));
    assert!(index.contains(r#"<h1 class="hero-title">Welcome</h1>"#));
    assert!(index.contains(r#"<link rel="stylesheet" href="style.css">"#));
    assert!(index.contains("© 2026 Acme School. All rights reserved."));
}

#[test]
fn test_multi_page_nav() {
    let site = SiteConfig::from_json(
        r#"{
            "global": {"header": {"links": [{"label": "Contact", "url": "/contact", "target": "page"}]}},
            "pages": [
                {"slug": "/", "name": "Home", "sections": []},
                {"slug": "/contact", "name": "Contact", "sections": [{"id": 2, "type": "contact", "data": {"email": "office@acme.edu"}}]}
            ]
        }"#,
    )
    .unwrap();
    let bytes = generate_website(&site, &School::new("Acme School"), now()).unwrap();
    let files = unzip(&bytes);

    for name in ["index.html", "contact.html"] {
        assert!(
            file(&files, name).contains(r#"<a href="contact.html">Contact</a>"#),
            "{name} lacks the contact link"
        );
    }
    assert!(file(&files, "contact.html").contains("<title>Acme School - Contact</title>"));
    assert!(file(&files, "contact.html").contains("office@acme.edu"));
}

#[test]
fn test_unknown_type_contributes_nothing() {
    let with_unknown = SiteConfig::from_json(
        r#"{"pages": [{"slug": "/", "name": "Home", "sections": [
            {"id": 1, "type": "about", "data": {"content": "First"}},
            {"id": 2, "type": "not-a-real-type", "data": {"content": "Ghost"}},
            {"id": 3, "type": "timeline", "data": {"events": [{"year": "2001", "title": "Opened"}]}}
        ]}]}"#,
    )
    .unwrap();
    let without = SiteConfig::from_json(
        r#"{"pages": [{"slug": "/", "name": "Home", "sections": [
            {"id": 1, "type": "about", "data": {"content": "First"}},
            {"id": 3, "type": "timeline", "data": {"events": [{"year": "2001", "title": "Opened"}]}}
        ]}]}"#,
    )
    .unwrap();

    let school = School::new("Acme School");
    let a = generate_website(&with_unknown, &school, now()).unwrap();
    let b = generate_website(&without, &school, now()).unwrap();

    let index = file(&unzip(&a), "index.html").to_string();
    assert!(index.contains("First"));
    assert!(index.contains("Opened"));
    assert!(!index.contains("Ghost"));
    assert_eq!(a, b);
}

#[test]
fn test_output_is_deterministic() {
    let site = SiteConfig::from_json(
        r##"{
            "global": {"colors": {"primary": "#0ea5e9"}, "customCss": "body { letter-spacing: 0; }"},
            "pages": [
                {"slug": "/", "name": "Home", "sections": [
                    {"id": "s1", "type": "hero-slider", "data": {"slides": [{"title": "A"}, {"title": "B"}], "showDots": true}},
                    {"id": "s2", "type": "tabs-content", "data": {"tabs": [{"label": "One"}, {"label": "Two"}]}}
                ]},
                {"slug": "/gallery", "name": "Gallery", "sections": [
                    {"id": "g", "type": "gallery-grid", "data": {"images": [{"url": "a.jpg"}]}, "customCss": "& img { border: 0; }"}
                ]}
            ]
        }"##,
    )
    .unwrap();
    let school = School::new("Acme School");

    let first = generate_website(&site, &school, now()).unwrap();
    for _ in 0..3 {
        assert_eq!(generate_website(&site, &school, now()).unwrap(), first);
    }
}

#[test]
fn test_null_values_render_as_empty() {
    let site = SiteConfig::from_json(
        r#"{
            "global": {"header": {"links": [{"label": null, "url": "/", "target": "page"}]}, "footer": {"text": null}},
            "pages": null,
            "sections": [
                {"id": 1, "type": "hero", "data": {"title": "Welcome", "subtitle": null}},
                {"id": 2, "type": "content-cards", "data": {"heading": null, "cards": [{"title": "Art", "description": null}]}}
            ]
        }"#,
    )
    .unwrap();
    let bytes = generate_website(&site, &School::new("Acme School"), now()).unwrap();
    let index = file(&unzip(&bytes), "index.html").to_string();

    assert!(index.contains(r#"<h1 class="hero-title">Welcome</h1>"#));
    assert!(index.contains("Art"));
    assert!(index.contains("© 2026 Acme School. All rights reserved."));
}

#[test]
fn test_year_comes_from_supplied_time() {
    let site = SiteConfig::from_json("{}").unwrap();
    let school = School::new("Acme School");
    let later = Utc.with_ymd_and_hms(2031, 1, 1, 0, 0, 0).unwrap();

    let bytes = generate_website(&site, &school, later).unwrap();
    assert!(file(&unzip(&bytes), "index.html").contains("© 2031 Acme School."));
}

#[test]
fn test_filename_collision_is_an_error() {
    let site = SiteConfig::from_json(
        r#"{"pages": [{"slug": "/about", "name": "About"}, {"slug": "about", "name": "About again"}]}"#,
    )
    .unwrap();
    let err = generate_website(&site, &School::new("Acme School"), now()).unwrap_err();

    match err {
        BuildError::Core(CoreError::DuplicateFilename {
            filename,
            first,
            second,
        }) => {
            assert_eq!(filename, "about.html");
            assert_eq!(first, "/about");
            assert_eq!(second, "about");
        }
        other => panic!("expected duplicate filename, got {other}"),
    }
}

#[test]
fn test_custom_css_scoping() {
    let site = SiteConfig::from_json(
        r#"{"pages": [{"slug": "/", "sections": [{"id": 42, "type": "about", "customCss": "color: red;"}]}]}"#,
    )
    .unwrap();
    let bytes = generate_website(&site, &School::new("Acme School"), now()).unwrap();
    let css = file(&unzip(&bytes), "style.css").to_string();

    assert!(css.contains("#section-42 { color: red; }"));
    assert!(css.contains("--primary: #2563eb;"));
    assert!(css.contains("--secondary: #1e293b;"));
}

#[test]
fn test_legacy_config() {
    let site = SiteConfig::from_json(
        r#"{
            "hero": {"title": "Old Welcome", "subtitle": "Since 1950"},
            "about": {"content": "Old about"},
            "principal": {"name": "Dr. Rao", "message": "Welcome"}
        }"#,
    )
    .unwrap();
    let bytes = generate_website(&site, &School::new("Acme School"), now()).unwrap();
    let index = file(&unzip(&bytes), "index.html").to_string();

    let hero = index.find(r#"id="section-hero""#).expect("hero");
    let about = index.find(r#"id="section-about""#).expect("about");
    let principal = index.find(r#"id="section-principal""#).expect("principal");
    assert!(hero < about && about < principal);
    assert!(index.contains("<title>Acme School - Home</title>"));
}

#[test]
fn test_dynamic_sections_use_school_snapshot() {
    let site = SiteConfig::from_json(
        r#"{"sections": [
            {"id": 1, "type": "dynamic_notices", "data": {"limit": 1}},
            {"id": 2, "type": "dynamic_gallery"}
        ]}"#,
    )
    .unwrap();
    let school: School = serde_json::from_str(
        r#"{
            "name": "Acme School",
            "notices": [
                {"title": "Exams begin", "createdAt": "2026-03-01T08:00:00Z"},
                {"title": "Holiday"}
            ]
        }"#,
    )
    .unwrap();

    let bytes = generate_website(&site, &school, now()).unwrap();
    let index = file(&unzip(&bytes), "index.html").to_string();
    assert!(index.contains("Exams begin"));
    assert!(index.contains("2026-03-01"));
    assert!(!index.contains("Holiday"));
    assert!(index.contains("No images in gallery."));
}

#[test]
fn test_builder_settings() {
    let mut config = Config::default();
    config.build.minify = true;
    config.build.parallel = false;

    let site = SiteConfig::from_json(r#"{"sections": [{"id": 1, "type": "about"}]}"#).unwrap();
    let archive = Builder::new(config, now())
        .generate(&site, &School::new("Acme School"))
        .unwrap();

    let index = &archive.file("index.html").unwrap().contents;
    assert!(!index.contains("\n "));
    assert_eq!(archive.stats.pages, 1);
    assert_eq!(archive.stats.sections, 1);
}

#[test]
fn test_yaml_inputs_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let site_path = dir.path().join("site.yaml");
    let school_path = dir.path().join("school.yml");
    std::fs::write(
        &site_path,
        "pages:\n  - slug: /\n    name: Home\n    sections:\n      - id: 7\n        type: about\n        data:\n          content: From YAML\n",
    )
    .unwrap();
    std::fs::write(&school_path, "name: Acme School\n").unwrap();

    let site = SiteConfig::load(&site_path).unwrap();
    let school = School::load(&school_path).unwrap();
    let archive = Builder::new(Config::default(), now())
        .generate(&site, &school)
        .unwrap();

    let zip_path = dir.path().join("website.zip");
    std::fs::write(&zip_path, &archive.bytes).unwrap();
    let files = unzip(&std::fs::read(&zip_path).unwrap());
    assert!(file(&files, "index.html").contains("From YAML"));
    assert!(file(&files, "index.html").contains(r#"id="section-7""#));
}

#[test]
fn test_sample_site_builds() {
    let demo = Path::new("../../demos/acme");
    if !demo.exists() {
        // Skip if running from a different working directory
        return;
    }

    let site = SiteConfig::load(&demo.join("site.json")).expect("site should load");
    let school = School::load(&demo.join("school.json")).expect("school should load");
    let archive = Builder::new(Config::default(), now())
        .generate(&site, &school)
        .expect("sample site should build");

    assert!(archive.file("index.html").is_some());
    assert_eq!(archive.stats.skipped_sections, 0);
}
