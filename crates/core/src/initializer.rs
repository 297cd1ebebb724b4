//! Host-facing entry point that builds containers and installs them.

use crate::container::{ContainerContext, DirContainer};
use crate::error::{ContainerError, Result};
use crate::logging::TracingLogSink;
use crate::registry::ContainerRegistry;
use crate::resolver::SuffixSourceLocator;
use dircontainer_api::{
    ContainerEntry, ContainerPath, LogSink, ProjectContext, Severity, SourceLocator,
    UpdateRequester,
};
use std::sync::Arc;

/// Builds a container for a classpath entry, validates it, and installs it in
/// the registry. Invalid containers are logged and never installed.
pub struct DirContainerInitializer {
    registry: Arc<ContainerRegistry>,
    log: Arc<dyn LogSink>,
    locator: Arc<dyn SourceLocator>,
}

impl DirContainerInitializer {
    pub fn new(registry: Arc<ContainerRegistry>) -> Self {
        Self {
            registry,
            log: Arc::new(TracingLogSink),
            locator: Arc::new(SuffixSourceLocator::default()),
        }
    }

    pub fn with_log_sink(mut self, log: Arc<dyn LogSink>) -> Self {
        self.log = log;
        self
    }

    pub fn with_locator(mut self, locator: Arc<dyn SourceLocator>) -> Self {
        self.locator = locator;
        self
    }

    pub fn registry(&self) -> &Arc<ContainerRegistry> {
        &self.registry
    }

    /// Context handed to every container built here, wired back to the registry.
    pub fn context(&self) -> ContainerContext {
        ContainerContext::new(self.log.clone())
            .with_locator(self.locator.clone())
            .with_requester(self.registry.requester())
    }

    pub fn initialize(
        &self,
        entry: &ContainerEntry,
        project: &ProjectContext,
    ) -> Result<Arc<DirContainer>> {
        let container = match DirContainer::from_entry(entry, project, self.context()) {
            Ok(container) => container,
            Err(e) => {
                self.log.log_error(Severity::Warning, &e);
                return Err(e);
            }
        };

        if !container.is_valid() {
            self.log
                .warn(&format!("Invalid directory container {}", entry.path));
            return Err(ContainerError::InvalidContainer {
                path: entry.path.clone(),
                directory: container.directory().to_path_buf(),
            });
        }

        Ok(self.registry.install(container))
    }

    pub fn can_update_container(&self, _path: &ContainerPath) -> bool {
        true
    }

    pub fn request_container_update(&self, path: &ContainerPath, replacement: DirContainer) {
        self.registry.request_update(path, replacement);
    }

    pub fn description(&self, path: &ContainerPath) -> String {
        path.description()
    }

    /// Key under which the host should compare container instances.
    pub fn comparison_id(&self, path: &ContainerPath) -> ContainerPath {
        path.clone()
    }

    pub fn lookup_existing(&self, path: &ContainerPath) -> Option<Arc<DirContainer>> {
        self.registry.get(path)
    }
}
