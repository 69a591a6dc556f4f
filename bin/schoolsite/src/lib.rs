//! schoolsite CLI Library
//!
//! Command implementations for the schoolsite binary, exposed as a library so
//! they can be documented and tested on their own.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, check, new)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use schoolsite::cmd;
//!
//! # async fn example() -> color_eyre::eyre::Result<()> {
//! cmd::build::run(
//!     Path::new("schoolsite.toml"),
//!     Path::new("site.json"),
//!     Path::new("school.json"),
//!     None,
//!     None,
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use schoolsite_core::{Config, School, SiteConfig};
pub use schoolsite_generator::{BuildStats, Builder, SiteArchive};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
