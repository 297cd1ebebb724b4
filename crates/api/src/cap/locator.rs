use std::io;
use std::path::{Path, PathBuf};

/// Maps a binary archive to its source archive, if one is available.
pub trait SourceLocator: Send + Sync {
    /// Returns `Ok(None)` when no source archive exists; I/O errors from the
    /// probe are returned so callers can log them.
    fn locate_source(&self, archive: &Path) -> io::Result<Option<PathBuf>>;

    /// Whether `file_stem` names a source archive rather than a primary one.
    fn is_source_stem(&self, file_stem: &str) -> bool;
}
