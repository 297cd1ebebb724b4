use super::filter::split_extension;
use dircontainer_api::SourceLocator;
use std::io;
use std::path::{Path, PathBuf};

/// Default marker distinguishing source archives: `foo-src.jar` for `foo.jar`.
pub const SOURCE_SUFFIX: &str = "-src";

/// Finds source archives that sit next to the binary archive and share its
/// base name plus a suffix, keeping the same extension.
#[derive(Debug, Clone)]
pub struct SuffixSourceLocator {
    suffix: String,
}

impl SuffixSourceLocator {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Candidate path for the source archive of `archive`, without touching the
    /// filesystem. Only the final `.ext` is rewritten.
    pub fn candidate(&self, archive: &Path) -> Option<PathBuf> {
        let name = archive.file_name()?.to_str()?;
        let (base, ext) = split_extension(name)?;
        Some(archive.with_file_name(format!("{base}{}.{ext}", self.suffix)))
    }
}

impl Default for SuffixSourceLocator {
    fn default() -> Self {
        Self::new(SOURCE_SUFFIX)
    }
}

impl SourceLocator for SuffixSourceLocator {
    fn locate_source(&self, archive: &Path) -> io::Result<Option<PathBuf>> {
        let Some(candidate) = self.candidate(archive) else {
            return Ok(None);
        };

        if candidate.try_exists()? {
            Ok(Some(candidate))
        } else {
            Ok(None)
        }
    }

    fn is_source_stem(&self, file_stem: &str) -> bool {
        file_stem.ends_with(&self.suffix)
    }
}
