use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One archive contributed to a classpath, with its optional source attachment.
///
/// Two entries are equal when both paths are equal. Entries order by archive
/// path first, so a sorted `Vec<LibraryEntry>` follows the scan order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LibraryEntry {
    archive_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_path: Option<PathBuf>,
}

impl LibraryEntry {
    pub fn new(archive_path: PathBuf, source_path: Option<PathBuf>) -> Self {
        Self {
            archive_path,
            source_path,
        }
    }

    /// Entry without a source attachment
    pub fn archive(archive_path: PathBuf) -> Self {
        Self::new(archive_path, None)
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        let a = LibraryEntry::new(
            PathBuf::from("/lib/a.jar"),
            Some(PathBuf::from("/lib/a-src.jar")),
        );
        let b = LibraryEntry::new(
            PathBuf::from("/lib/a.jar"),
            Some(PathBuf::from("/lib/a-src.jar")),
        );
        let without_source = LibraryEntry::archive(PathBuf::from("/lib/a.jar"));

        assert_eq!(a, b);
        assert_ne!(a, without_source);
    }

    #[test]
    fn test_json_omits_missing_source() {
        let entry = LibraryEntry::archive(PathBuf::from("/lib/a.jar"));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"archive_path":"/lib/a.jar"}"#);

        let back: LibraryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
