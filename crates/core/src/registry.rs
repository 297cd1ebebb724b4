//! In-memory registry of installed directory containers.
//!
//! Provides thread-safe storage for ContainerPath → container mappings. Readers
//! get an `Arc` snapshot; replacing a container is a single insert, so a reader
//! sees either the old or the new instance, never a mix.

use crate::container::DirContainer;
use dashmap::DashMap;
use dircontainer_api::{ContainerPath, UpdateRequester};
use std::sync::{Arc, Weak};
use tracing::debug;

#[derive(Default)]
pub struct ContainerRegistry {
    containers: DashMap<ContainerPath, Arc<DirContainer>>,
}

impl ContainerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `container` under its own path, replacing any previous one.
    pub fn install(&self, container: DirContainer) -> Arc<DirContainer> {
        let container = Arc::new(container);
        let previous = self
            .containers
            .insert(container.path().clone(), container.clone());
        if previous.is_some() {
            debug!("Replaced container {}", container.path());
        } else {
            debug!("Installed container {}", container.path());
        }
        container
    }

    pub fn get(&self, path: &ContainerPath) -> Option<Arc<DirContainer>> {
        self.containers.get(path).map(|c| c.value().clone())
    }

    pub fn remove(&self, path: &ContainerPath) -> Option<Arc<DirContainer>> {
        self.containers.remove(path).map(|(_, c)| c)
    }

    /// Containers installed for `project`, ordered by path.
    pub fn containers_for_project(&self, project: &str) -> Vec<Arc<DirContainer>> {
        let mut containers: Vec<_> = self
            .containers
            .iter()
            .filter(|c| c.key().project() == project)
            .map(|c| c.value().clone())
            .collect();
        containers.sort_by(|a, b| a.path().cmp(b.path()));
        containers
    }

    pub fn paths(&self) -> Vec<ContainerPath> {
        let mut paths: Vec<_> = self.containers.iter().map(|c| c.key().clone()).collect();
        paths.sort();
        paths
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Weak handle containers use to request their own replacement.
    pub fn requester(self: &Arc<Self>) -> Weak<dyn UpdateRequester<DirContainer>> {
        let requester: Arc<dyn UpdateRequester<DirContainer>> = self.clone();
        Arc::downgrade(&requester)
    }
}

impl UpdateRequester<DirContainer> for ContainerRegistry {
    fn request_update(&self, path: &ContainerPath, replacement: DirContainer) {
        if replacement.path() != path {
            tracing::warn!(
                "Replacement for {} carries path {}, installing under the latter",
                path,
                replacement.path()
            );
        }
        self.install(replacement);
    }
}
