//! schoolsite CLI
//!
//! Generates a school's static website archive from its page configuration.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for schoolsite.
#[derive(Parser)]
#[command(
    name = "schoolsite",
    version,
    about = "Generate a school's static website archive"
)]
struct Cli {
    /// Path to the generator settings file
    #[arg(short, long, default_value = "schoolsite.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Generate the website archive
    Build {
        /// Site configuration (JSON or YAML)
        #[arg(short, long, default_value = "site.json")]
        site: PathBuf,
        /// School record (JSON or YAML)
        #[arg(long, default_value = "school.json")]
        school: PathBuf,
        /// Archive path (defaults to build.archive_name)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Copyright year of the default footer (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Validate a site configuration
    Check {
        /// Site configuration (JSON or YAML)
        #[arg(short, long, default_value = "site.json")]
        site: PathBuf,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Write a starter site configuration
    New {
        /// Path of the new configuration
        #[arg(default_value = "site.json")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    schoolsite::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            site,
            school,
            output,
            year,
        } => {
            schoolsite::cmd::build::run(&cli.config, &site, &school, output.as_deref(), year)
                .await?;
        }
        Commands::Check { site, strict } => {
            schoolsite::cmd::check::run(&cli.config, &site, strict)?;
        }
        Commands::New { path, force } => {
            schoolsite::cmd::new::run(&path, force)?;
        }
    }

    Ok(())
}
