use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// The host project a container belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectContext {
    pub name: String,
    pub root: PathBuf,
}

impl ProjectContext {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// Use the last component of `root` as the project name.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "project".to_string());
        Self { name, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `path` lies inside the project root (the root itself included).
    ///
    /// Both sides are compared after [`normalize_path`], so `..` segments
    /// cannot escape the root.
    pub fn contains(&self, path: &Path) -> bool {
        normalize_path(path).starts_with(normalize_path(&self.root))
    }
}

/// Collapse `.` and `..` segments without touching the filesystem.
///
/// `..` directly under the root is dropped; leading `..` of a relative path
/// are kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("/work/app/../other/./lib")),
            PathBuf::from("/work/other/lib")
        );
        assert_eq!(normalize_path(Path::new("/../lib")), PathBuf::from("/lib"));
        assert_eq!(normalize_path(Path::new("../a/b/..")), PathBuf::from("../a"));
        assert_eq!(normalize_path(Path::new("a/../..")), PathBuf::from(".."));
    }

    #[test]
    fn test_contains_sees_through_parent_segments() {
        let project = ProjectContext::new("app", "/work/app");

        assert!(project.contains(Path::new("/work/app")));
        assert!(project.contains(Path::new("/work/app/lib/../ext")));
        assert!(!project.contains(Path::new("/work/app/../other/lib")));
        assert!(!project.contains(Path::new("/work/application")));
    }
}
