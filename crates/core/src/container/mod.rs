//! Directory container: caches the resolved entries of one configured directory.
//!
//! A container never rescans in place. Each read of [`DirContainer::current_entries`]
//! re-resolves the directory and, when the result differs from the cached
//! list, builds a fresh container and hands it to the attached
//! [`UpdateRequester`], which swaps it in. The old instance keeps serving its
//! (stale) list until it is dropped.

mod status;

pub use status::ContainerStatus;

use crate::error::{ContainerError, Result};
use crate::logging::TracingLogSink;
use crate::resolver::{DirectoryResolver, SuffixSourceLocator, absolute, split_extension};
use dircontainer_api::{
    ClasspathContributor, ContainerEntry, ContainerPath, ExtensionSet, LibraryEntry, LogSink,
    ProjectContext, ResolverConfig, SourceLocator, UpdateRequester,
};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Weak};

/// Collaborators shared by a container and every replacement built from it.
#[derive(Clone)]
pub struct ContainerContext {
    log: Arc<dyn LogSink>,
    locator: Arc<dyn SourceLocator>,
    requester: Option<Weak<dyn UpdateRequester<DirContainer>>>,
}

impl ContainerContext {
    pub fn new(log: Arc<dyn LogSink>) -> Self {
        Self {
            log,
            locator: Arc::new(SuffixSourceLocator::default()),
            requester: None,
        }
    }

    pub fn with_locator(mut self, locator: Arc<dyn SourceLocator>) -> Self {
        self.locator = locator;
        self
    }

    /// Attach the receiver of update requests. Held weakly: registries own
    /// their containers, not the other way round.
    pub fn with_requester(mut self, requester: Weak<dyn UpdateRequester<DirContainer>>) -> Self {
        self.requester = Some(requester);
        self
    }

    pub fn log(&self) -> &Arc<dyn LogSink> {
        &self.log
    }

    fn resolver(&self) -> DirectoryResolver {
        DirectoryResolver::new(self.log.clone(), self.locator.clone())
    }
}

impl Default for ContainerContext {
    fn default() -> Self {
        Self::new(Arc::new(TracingLogSink))
    }
}

pub struct DirContainer {
    path: ContainerPath,
    project: ProjectContext,
    config: ResolverConfig,
    description: String,
    entries: Vec<LibraryEntry>,
    status: AtomicU8,
    context: ContainerContext,
}

impl DirContainer {
    /// Build a container for `path` inside `project` and resolve it once.
    ///
    /// A missing directory is created (with a warning). Fails when the
    /// directory cannot be created or is not a directory.
    pub fn new(
        path: ContainerPath,
        project: &ProjectContext,
        extensions: ExtensionSet,
        context: ContainerContext,
    ) -> Result<Self> {
        if path.project() != project.name {
            return Err(ContainerError::ProjectMismatch(path));
        }

        let directory = absolute(&path.resolve_directory(project));
        ensure_directory(&directory, &path, project, context.log.as_ref())?;
        if !directory.is_dir() {
            return Err(ContainerError::InvalidContainer { path, directory });
        }

        let config = ResolverConfig::new(directory, extensions);
        if config.is_permissive() {
            context.log.info(&format!(
                "No extensions configured for {path}, accepting every file"
            ));
        }

        let mut container = Self {
            description: path.description(),
            path,
            project: project.clone(),
            config,
            entries: Vec::new(),
            status: AtomicU8::new(ContainerStatus::Initializing as u8),
            context,
        };
        container.entries = container.context.resolver().resolve(&container.config);
        container.set_status(ContainerStatus::InUse);

        Ok(container)
    }

    /// Build from a raw classpath entry; the extensions come from its
    /// `extensions` attribute (none configured when absent).
    pub fn from_entry(
        entry: &ContainerEntry,
        project: &ProjectContext,
        context: ContainerContext,
    ) -> Result<Self> {
        let extensions = entry.extensions().unwrap_or_default();
        Self::new(entry.path.clone(), project, extensions, context)
    }

    pub fn path(&self) -> &ContainerPath {
        &self.path
    }

    pub fn project(&self) -> &ProjectContext {
        &self.project
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn directory(&self) -> &Path {
        self.config.directory()
    }

    pub fn extensions(&self) -> &ExtensionSet {
        &self.config.extensions
    }

    pub fn status(&self) -> ContainerStatus {
        ContainerStatus::from_u8(self.status.load(Ordering::Acquire))
    }

    /// Entries captured at construction, without a staleness check.
    pub fn cached_entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    /// The configured directory exists and is a directory.
    pub fn is_valid(&self) -> bool {
        self.directory().is_dir()
    }

    /// Whether a rescan now would produce a different entry set.
    pub fn is_stale(&self) -> bool {
        let fresh = self.context.resolver().resolve(&self.config);
        entries_differ(&self.entries, &fresh)
    }

    /// Cached entries, requesting a replacement first if the directory changed.
    ///
    /// At most one update is requested per instance, even when building the
    /// replacement fails; afterwards the cached list is returned as is until
    /// the instance is replaced.
    pub fn current_entries(&self) -> &[LibraryEntry] {
        if self.status() != ContainerStatus::UpdateRequested && self.is_stale() {
            self.request_update();
        }
        &self.entries
    }

    /// Whether `file` is one this container would include: it sits directly in
    /// the container directory and carries a configured extension.
    pub fn is_member(&self, file: &Path) -> bool {
        let file = absolute(file);
        if file.parent() != Some(self.directory()) {
            return false;
        }

        file.file_name()
            .and_then(|name| name.to_str())
            .and_then(split_extension)
            .is_some_and(|(_, ext)| self.config.extensions.contains(&ext.to_lowercase()))
    }

    /// A fresh container over the same configuration.
    pub fn rebuild(&self) -> Result<DirContainer> {
        DirContainer::new(
            self.path.clone(),
            &self.project,
            self.config.extensions.clone(),
            self.context.clone(),
        )
    }

    fn request_update(&self) {
        let log = self.context.log.as_ref();
        let Some(requester) = self.context.requester.as_ref().and_then(Weak::upgrade) else {
            log.debug(&format!(
                "Container {} changed but has no update requester",
                self.path
            ));
            return;
        };

        // Only the reader winning this transition builds the replacement.
        if self
            .status
            .compare_exchange(
                ContainerStatus::InUse as u8,
                ContainerStatus::UpdateRequested as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_err()
        {
            return;
        }

        match self.rebuild() {
            Ok(replacement) => {
                log.info(&format!(
                    "Entries of {} changed, requesting container update",
                    self.path
                ));
                requester.request_update(&self.path, replacement);
            }
            Err(e) => {
                log.error(&format!(
                    "Failed to rebuild container {}: {}",
                    self.path, e
                ));
            }
        }
    }

    fn set_status(&self, status: ContainerStatus) {
        self.status.store(status as u8, Ordering::Release);
    }
}

impl ClasspathContributor for DirContainer {
    fn entries(&self) -> Vec<LibraryEntry> {
        self.current_entries().to_vec()
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn path(&self) -> &ContainerPath {
        &self.path
    }
}

impl fmt::Debug for DirContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirContainer")
            .field("path", &self.path.to_string())
            .field("directory", &self.config.directory)
            .field("extensions", &self.config.extensions.to_string())
            .field("status", &self.status())
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// True when `fresh` differs from `cached`: different length, or same length
/// with different membership.
pub fn entries_differ(cached: &[LibraryEntry], fresh: &[LibraryEntry]) -> bool {
    if cached.len() != fresh.len() {
        return true;
    }

    let cached: HashSet<&LibraryEntry> = cached.iter().collect();
    let fresh: HashSet<&LibraryEntry> = fresh.iter().collect();
    cached.symmetric_difference(&fresh).next().is_some()
}

fn ensure_directory(
    directory: &Path,
    path: &ContainerPath,
    project: &ProjectContext,
    log: &dyn LogSink,
) -> Result<()> {
    if directory.exists() {
        return Ok(());
    }

    log.warn(&format!(
        "Folder of directory container missing: {} of project {}, creating it now",
        directory.display(),
        project.name
    ));
    std::fs::create_dir_all(directory).map_err(|source| ContainerError::CreateDirectory {
        path: directory.to_path_buf(),
        source,
    })?;
    log.debug(&format!("Created {} for {}", directory.display(), path));
    Ok(())
}
