use super::extension::ExtensionSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The decoded `(directory, extensions)` pair a resolver scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    pub directory: PathBuf,
    #[serde(default)]
    pub extensions: ExtensionSet,
}

impl ResolverConfig {
    pub fn new(directory: impl Into<PathBuf>, extensions: ExtensionSet) -> Self {
        Self {
            directory: directory.into(),
            extensions,
        }
    }

    /// Configuration with no extension filter (permissive fallback)
    pub fn any_extension(directory: impl Into<PathBuf>) -> Self {
        Self::new(directory, ExtensionSet::new())
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// True when no extensions are configured and every extension is accepted.
    pub fn is_permissive(&self) -> bool {
        self.extensions.is_empty()
    }
}
