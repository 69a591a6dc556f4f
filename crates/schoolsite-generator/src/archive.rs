//! Zip packaging of the generated site.
//!
//! Entries are written in the order given, with a fixed timestamp and fixed
//! permissions, so the same files always produce the same bytes.

use std::{
    collections::HashSet,
    io::{Cursor, Write},
};

use thiserror::Error;
use tracing::debug;
use zip::{CompressionMethod, DateTime, ZipWriter, result::ZipError, write::FileOptions};

/// Archive errors.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Zip encoding failed.
    #[error("zip error: {0}")]
    Zip(#[from] ZipError),

    /// Writing entry data failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Two entries share a name.
    #[error("duplicate archive entry: {0}")]
    DuplicateEntry(String),
}

/// Result type for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// A file of the generated site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFile {
    /// Flat file name inside the archive.
    pub name: String,
    /// File contents.
    pub contents: String,
}

impl SiteFile {
    /// Create a file entry.
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// Options shared by every entry.
fn entry_options() -> FileOptions {
    FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644)
}

/// Package files into an in-memory zip archive.
pub fn package(files: &[SiteFile]) -> Result<Vec<u8>> {
    let mut seen = HashSet::new();
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for file in files {
        if !seen.insert(file.name.as_str()) {
            return Err(ArchiveError::DuplicateEntry(file.name.clone()));
        }
        debug!(name = %file.name, bytes = file.contents.len(), "adding archive entry");
        writer.start_file(file.name.as_str(), entry_options())?;
        writer.write_all(file.contents.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}
