//! Headless model of the page that collects a container's directory and extensions.

use dircontainer_api::{
    ConfigurationPage, ContainerEntry, ExtraAttribute, ProjectContext, ValidationError,
    normalize_path,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Component, Path, PathBuf};

/// Extensions offered for a new container.
pub const DEFAULT_EXTENSIONS: &str = "jar,zip";

static EXTENSIONS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_][a-z0-9_,]*$").expect("extension pattern is valid"));

#[derive(Debug, Default)]
pub struct DirContainerPage {
    project: Option<ProjectContext>,
    initial: Option<ContainerEntry>,
    directory: String,
    extensions: String,
}

impl DirContainerPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn extensions(&self) -> &str {
        self.extensions.trim()
    }

    pub fn set_directory(&mut self, directory: impl Into<String>) {
        self.directory = directory.into();
    }

    pub fn set_extensions(&mut self, extensions: impl Into<String>) {
        self.extensions = extensions.into();
    }

    fn refresh(&mut self) {
        let Some(project) = &self.project else {
            return;
        };

        self.directory = match &self.initial {
            Some(entry) => entry.path.resolve_directory(project),
            None => project.root.clone(),
        }
        .to_string_lossy()
        .to_string();

        self.extensions = self
            .initial
            .as_ref()
            .and_then(|entry| entry.attribute(ExtraAttribute::FileExtensions))
            .unwrap_or(DEFAULT_EXTENSIONS)
            .to_string();
    }

    fn normalized_directory(&self) -> PathBuf {
        normalize_path(Path::new(self.directory.trim()))
    }

    fn project(&self) -> Result<&ProjectContext, ValidationError> {
        self.project.as_ref().ok_or(ValidationError::MissingProject)
    }
}

impl ConfigurationPage for DirContainerPage {
    fn initialize(&mut self, project: ProjectContext) {
        self.project = Some(project);
        self.refresh();
    }

    fn set_selection(&mut self, entry: Option<&ContainerEntry>) {
        self.initial = entry.cloned();
        self.refresh();
    }

    fn finish(&self) -> Result<(), ValidationError> {
        let project = self.project()?;

        if !are_extensions_valid(self.extensions()) {
            return Err(ValidationError::InvalidExtensions(
                self.extensions().to_string(),
            ));
        }

        if !project.contains(&self.normalized_directory()) {
            return Err(ValidationError::DirectoryOutsideProject {
                directory: self.directory.clone(),
                project: project.name.clone(),
            });
        }

        Ok(())
    }

    fn selection(&self) -> Result<ContainerEntry, ValidationError> {
        self.finish()?;
        let project = self.project()?;

        let directory = self.normalized_directory();
        let relative = directory
            .strip_prefix(normalize_path(&project.root))
            .map(relative_segments)
            .unwrap_or_default();

        Ok(ContainerEntry::for_directory(
            project,
            &relative,
            self.extensions(),
        ))
    }
}

/// Non-empty, lowercase, comma separated.
pub fn are_extensions_valid(extensions: &str) -> bool {
    EXTENSIONS_PATTERN.is_match(extensions)
}

fn relative_segments(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(segment) => Some(segment.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
