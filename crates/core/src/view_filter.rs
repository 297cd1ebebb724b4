use crate::registry::ContainerRegistry;
use dircontainer_api::ProjectContext;
use std::path::Path;
use std::sync::Arc;

/// Hides files from a project browser when a directory container of the same
/// project already puts them on the classpath, so they cannot be added twice.
pub struct ContainerDirFilter {
    registry: Arc<ContainerRegistry>,
}

impl ContainerDirFilter {
    pub fn new(registry: Arc<ContainerRegistry>) -> Self {
        Self { registry }
    }

    /// `false` when `file` should be hidden.
    pub fn select(&self, file: &Path, project: &ProjectContext) -> bool {
        !self
            .registry
            .containers_for_project(&project.name)
            .iter()
            .any(|container| container.is_member(file))
    }
}
