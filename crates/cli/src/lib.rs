mod check;
mod describe;
mod entry;
mod resolve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "dircontainer",
    version,
    about = "Resolve a directory of library archives into classpath entries",
    long_about = "dircontainer lists the archives of a directory that match a set of extensions, \
                  attaches `-src` companion archives as sources, and detects when a directory \
                  no longer matches a previously resolved entry list."
)]
pub struct Cli {
    /// Mirror log output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the library entries of a directory
    Resolve {
        /// Directory to scan (not recursive)
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Comma separated extensions; empty accepts every extension
        #[arg(short, long, default_value = "jar,zip")]
        extensions: String,

        /// Print JSON instead of a table (usable as a baseline for `check`)
        #[arg(long)]
        json: bool,
    },
    /// Compare a saved entry list against the directory
    #[command(long_about = "Reads a JSON entry list written by `resolve --json` and rescans the \
                            directory. Exits with status 1 when the entries changed.")]
    Check {
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// JSON file written by `resolve --json`
        #[arg(short, long, value_name = "FILE")]
        baseline: PathBuf,

        #[arg(short, long, default_value = "jar,zip")]
        extensions: String,
    },
    /// Build a container from its classpath path and show what it resolves to
    Describe {
        /// Root directory of the project owning the container
        #[arg(value_name = "PROJECT_ROOT")]
        project_root: PathBuf,

        /// e.g. org.container.directory.SIMPLE_DIR_CONTAINER/app/lib
        #[arg(value_name = "CONTAINER_PATH")]
        container_path: String,

        /// Extension attribute of the container entry
        #[arg(short, long)]
        extensions: Option<String>,

        /// Parse the legacy layout with the extensions as last segment
        #[arg(long)]
        legacy: bool,
    },
    /// Validate a directory/extension selection and print its container entry
    Entry {
        #[arg(value_name = "PROJECT_ROOT")]
        project_root: PathBuf,

        /// Directory inside the project
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        #[arg(short, long)]
        extensions: Option<String>,
    },
}

pub fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _guard = dircontainer_core::logging::init_logging("cli", cli.verbose);

    match cli.command {
        Commands::Resolve {
            dir,
            extensions,
            json,
        } => resolve::run(dir, &extensions, json)?,
        Commands::Check {
            dir,
            baseline,
            extensions,
        } => {
            if check::run(dir, &extensions, baseline)? {
                return Ok(ExitCode::from(1));
            }
        }
        Commands::Describe {
            project_root,
            container_path,
            extensions,
            legacy,
        } => describe::run(project_root, &container_path, extensions, legacy)?,
        Commands::Entry {
            project_root,
            dir,
            extensions,
        } => entry::run(project_root, dir, extensions)?,
    }

    Ok(ExitCode::SUCCESS)
}

/// Canonical form when the path exists, absolute form otherwise.
pub(crate) fn normalize_path(path: &std::path::Path) -> std::io::Result<PathBuf> {
    match path.canonicalize() {
        Ok(path) => Ok(path),
        Err(_) => std::path::absolute(path),
    }
}
