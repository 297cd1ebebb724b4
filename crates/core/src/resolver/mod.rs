//! Directory resolver - turns a directory and an extension set into library entries.
//!
//! The resolver:
//! 1. Lists the immediate children of the directory (no recursion)
//! 2. Keeps regular files passing the inclusion [`filter`]
//! 3. Sorts them byte-wise by full path
//! 4. Pairs each archive with its source archive via a [`SourceLocator`]
//!
//! Resolution is best-effort: a missing directory yields no entries, and I/O
//! failures are logged and skip the affected file instead of failing the scan.

pub mod filter;
pub mod locator;

pub use filter::{accepts, split_extension};
pub use locator::{SOURCE_SUFFIX, SuffixSourceLocator};

use crate::logging::TracingLogSink;
use dircontainer_api::{
    ExtensionSet, LibraryEntry, LogSink, ResolverConfig, SourceLocator, normalize_path,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// Stateless scanner; holds only its injected collaborators.
#[derive(Clone)]
pub struct DirectoryResolver {
    log: Arc<dyn LogSink>,
    locator: Arc<dyn SourceLocator>,
}

impl DirectoryResolver {
    pub fn new(log: Arc<dyn LogSink>, locator: Arc<dyn SourceLocator>) -> Self {
        Self { log, locator }
    }

    pub fn log(&self) -> &Arc<dyn LogSink> {
        &self.log
    }

    pub fn locator(&self) -> &Arc<dyn SourceLocator> {
        &self.locator
    }

    /// Resolve the entries for `config`, sorted by archive path.
    pub fn resolve(&self, config: &ResolverConfig) -> Vec<LibraryEntry> {
        let dir = absolute(config.directory());
        if !dir.is_dir() {
            self.log.debug(&format!(
                "Directory {} does not exist, resolving no entries",
                dir.display()
            ));
            return Vec::new();
        }

        let mut archives = self.list_archives(&dir, &config.extensions);
        archives.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

        archives
            .into_iter()
            .filter_map(|archive| match self.locator.locate_source(&archive) {
                Ok(source) => Some(LibraryEntry::new(archive, source)),
                Err(e) => {
                    self.log.error(&format!(
                        "Failed to probe source archive for {}: {}",
                        archive.display(),
                        e
                    ));
                    None
                }
            })
            .collect()
    }

    fn list_archives(&self, dir: &Path, extensions: &ExtensionSet) -> Vec<PathBuf> {
        let mut archives = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.log
                        .error(&format!("Failed to list {}: {}", dir.display(), e));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                self.log.warn(&format!(
                    "Skipping non UTF-8 file name {:?} in {}",
                    entry.file_name(),
                    dir.display()
                ));
                continue;
            };

            if accepts(name, extensions, self.locator.as_ref()) {
                archives.push(entry.into_path());
            }
        }

        archives
    }
}

impl Default for DirectoryResolver {
    fn default() -> Self {
        Self::new(
            Arc::new(TracingLogSink),
            Arc::new(SuffixSourceLocator::default()),
        )
    }
}

/// Resolve with the default collaborators (tracing log sink, `-src` locator).
pub fn resolve(config: &ResolverConfig) -> Vec<LibraryEntry> {
    DirectoryResolver::default().resolve(config)
}

/// Absolute form of `path` with `.` and `..` collapsed.
pub(crate) fn absolute(path: &Path) -> PathBuf {
    normalize_path(&std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()))
}
