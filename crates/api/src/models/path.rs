//! Structured identifiers that host classpath models store for a directory container.
//!
//! A container path has the shape `CONTAINER_ID/<project>/<relative dir>` where
//! the relative directory may span several segments and `-` stands for the
//! project root. The extension list travels next to the path as an extra
//! attribute of the [`ContainerEntry`]. Older configurations encoded the
//! extensions as the last path segment instead; [`ContainerPath::parse_legacy`]
//! still reads those.

use super::extension::ExtensionSet;
use super::project::ProjectContext;
use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Unique id of the directory container kind, always the first path segment.
pub const CONTAINER_ID: &str = "org.container.directory.SIMPLE_DIR_CONTAINER";

/// Directory segment standing for the project root.
pub const ROOT_DIR: &str = "-";

const DESCRIPTION_PREFIX: &str = "Directory Classpath: /";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerPath {
    project: String,
    directory: String,
}

impl ContainerPath {
    /// Build a path for a project-relative directory. An empty directory (or
    /// `-`) selects the project root.
    pub fn new(project: impl Into<String>, directory: &str) -> Self {
        Self {
            project: project.into(),
            directory: normalize_dir(directory),
        }
    }

    /// Parse `CONTAINER_ID/<project>[/<dir>...]`.
    pub fn parse(raw: &str) -> ApiResult<Self> {
        let segments = split_segments(raw);
        check_id(raw, &segments)?;

        let Some(project) = segments.get(1) else {
            return Err(ApiError::MalformedPath {
                path: raw.to_string(),
                reason: "missing project segment",
            });
        };

        Ok(Self::new(*project, &segments[2..].join("/")))
    }

    /// Parse the legacy `CONTAINER_ID/<dir>.../<extensions>` layout, which
    /// carries no project segment.
    pub fn parse_legacy(raw: &str, project: &str) -> ApiResult<(Self, ExtensionSet)> {
        let segments = split_segments(raw);
        check_id(raw, &segments)?;

        if segments.len() < 3 {
            return Err(ApiError::MalformedPath {
                path: raw.to_string(),
                reason: "expected directory and extension segments",
            });
        }

        let last = segments.len() - 1;
        let extensions = ExtensionSet::parse(segments[last]);
        let directory = segments[1..last].join("/");
        Ok((Self::new(project, &directory), extensions))
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// The project-relative directory, `None` for the project root.
    pub fn relative_dir(&self) -> Option<&str> {
        if self.is_root() {
            None
        } else {
            Some(&self.directory)
        }
    }

    pub fn is_root(&self) -> bool {
        self.directory == ROOT_DIR
    }

    /// Absolute directory this path designates inside `project`.
    pub fn resolve_directory(&self, project: &ProjectContext) -> PathBuf {
        match self.relative_dir() {
            Some(dir) => dir
                .split('/')
                .fold(project.root.clone(), |acc, segment| acc.join(segment)),
            None => project.root.clone(),
        }
    }

    /// User facing label, e.g. `Directory Classpath: /app/lib`.
    pub fn description(&self) -> String {
        match self.relative_dir() {
            Some(dir) => format!("{DESCRIPTION_PREFIX}{}/{dir}", self.project),
            None => format!("{DESCRIPTION_PREFIX}{}", self.project),
        }
    }
}

impl fmt::Display for ContainerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CONTAINER_ID}/{}/{}", self.project, self.directory)
    }
}

fn split_segments(raw: &str) -> Vec<&str> {
    raw.split(['/', '\\']).filter(|s| !s.is_empty()).collect()
}

fn check_id(raw: &str, segments: &[&str]) -> ApiResult<()> {
    if segments.first() == Some(&CONTAINER_ID) {
        Ok(())
    } else {
        Err(ApiError::MalformedPath {
            path: raw.to_string(),
            reason: "not a directory container path",
        })
    }
}

fn normalize_dir(raw: &str) -> String {
    let joined = split_segments(raw).join("/");
    if joined.is_empty() {
        ROOT_DIR.to_string()
    } else {
        joined
    }
}

/// Named extra attributes attached to a container entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraAttribute {
    FileExtensions,
}

impl ExtraAttribute {
    pub fn name(&self) -> &'static str {
        match self {
            ExtraAttribute::FileExtensions => "extensions",
        }
    }
}

/// The raw record a host classpath stores for one directory container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerEntry {
    pub path: ContainerPath,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl ContainerEntry {
    pub fn new(path: ContainerPath) -> Self {
        Self {
            path,
            attributes: BTreeMap::new(),
        }
    }

    /// Entry for `relative_dir` of `project` carrying `extensions` as given by
    /// the user (comma separated).
    pub fn for_directory(project: &ProjectContext, relative_dir: &str, extensions: &str) -> Self {
        Self::new(ContainerPath::new(project.name.clone(), relative_dir))
            .with_attribute(ExtraAttribute::FileExtensions, extensions)
    }

    pub fn with_attribute(mut self, attribute: ExtraAttribute, value: impl Into<String>) -> Self {
        self.attributes
            .insert(attribute.name().to_string(), value.into());
        self
    }

    /// Attribute lookup; names compare case-insensitively.
    pub fn attribute(&self, attribute: ExtraAttribute) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(attribute.name()))
            .map(|(_, value)| value.as_str())
    }

    /// Configured extensions, `None` when the attribute is absent.
    pub fn extensions(&self) -> Option<ExtensionSet> {
        self.attribute(ExtraAttribute::FileExtensions)
            .map(ExtensionSet::parse)
    }
}
