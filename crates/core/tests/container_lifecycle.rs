mod common;

use common::{RecordingLog, file_names, touch};
use dircontainer_api::{
    ClasspathContributor, ContainerEntry, ContainerPath, ExtensionSet, ProjectContext, Severity,
    UpdateRequester,
};
use dircontainer_core::{
    ContainerContext, ContainerDirFilter, ContainerError, ContainerRegistry, ContainerStatus,
    DirContainer, DirContainerInitializer,
};
use std::fs;
use std::sync::{Arc, Mutex};

/// Requester that only records what it was handed.
#[derive(Default)]
struct CollectingRequester {
    replacements: Mutex<Vec<(ContainerPath, DirContainer)>>,
}

impl CollectingRequester {
    fn count(&self) -> usize {
        self.replacements.lock().unwrap().len()
    }
}

impl UpdateRequester<DirContainer> for CollectingRequester {
    fn request_update(&self, path: &ContainerPath, replacement: DirContainer) {
        self.replacements
            .lock()
            .unwrap()
            .push((path.clone(), replacement));
    }
}

struct Fixture {
    _temp: tempfile::TempDir,
    project: ProjectContext,
    log: Arc<RecordingLog>,
    requester: Arc<CollectingRequester>,
}

impl Fixture {
    fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let project = ProjectContext::new("app", temp.path().join("app"));
        fs::create_dir_all(&project.root).unwrap();
        Self {
            _temp: temp,
            project,
            log: Arc::new(RecordingLog::default()),
            requester: Arc::new(CollectingRequester::default()),
        }
    }

    fn lib(&self) -> std::path::PathBuf {
        self.project.root.join("lib")
    }

    fn container(&self) -> DirContainer {
        let requester: Arc<dyn UpdateRequester<DirContainer>> = self.requester.clone();
        let context = ContainerContext::new(self.log.clone()).with_requester(Arc::downgrade(&requester));
        DirContainer::new(
            ContainerPath::new("app", "lib"),
            &self.project,
            ExtensionSet::parse("jar"),
            context,
        )
        .unwrap()
    }
}

#[test]
fn test_construction_resolves_once() {
    let fx = Fixture::new();
    touch(&fx.lib(), &["a.jar", "b.jar"]);

    let container = fx.container();

    assert_eq!(container.status(), ContainerStatus::InUse);
    assert!(container.is_valid());
    assert_eq!(file_names(container.cached_entries()), vec!["a.jar", "b.jar"]);
    assert_eq!(container.description(), "Directory Classpath: /app/lib");
}

#[test]
fn test_unchanged_directory_is_not_stale() {
    let fx = Fixture::new();
    touch(&fx.lib(), &["a.jar", "b.jar"]);
    let container = fx.container();

    assert!(!container.is_stale());
    assert_eq!(file_names(container.current_entries()), vec!["a.jar", "b.jar"]);
    assert_eq!(container.status(), ContainerStatus::InUse);
    assert_eq!(fx.requester.count(), 0);
}

#[test]
fn test_added_file_is_stale() {
    let fx = Fixture::new();
    touch(&fx.lib(), &["a.jar"]);
    let container = fx.container();

    touch(&fx.lib(), &["b.jar"]);

    assert!(container.is_stale());
}

#[test]
fn test_same_count_different_membership_is_stale() {
    let fx = Fixture::new();
    touch(&fx.lib(), &["a.jar", "b.jar"]);
    let container = fx.container();

    fs::remove_file(fx.lib().join("b.jar")).unwrap();
    touch(&fx.lib(), &["c.jar"]);

    assert!(container.is_stale());
}

#[test]
fn test_new_source_attachment_is_stale() {
    let fx = Fixture::new();
    touch(&fx.lib(), &["a.jar"]);
    let container = fx.container();

    touch(&fx.lib(), &["a-src.jar"]);

    assert!(container.is_stale());
}

#[test]
fn test_ignored_files_do_not_make_stale() {
    let fx = Fixture::new();
    touch(&fx.lib(), &["a.jar"]);
    let container = fx.container();

    touch(&fx.lib(), &["notes.txt", "README"]);

    assert!(!container.is_stale());
}

#[test]
fn test_stale_container_requests_single_update() {
    let fx = Fixture::new();
    touch(&fx.lib(), &["a.jar"]);
    let container = fx.container();

    touch(&fx.lib(), &["b.jar"]);

    // The stale list is still served, the replacement carries the new one.
    assert_eq!(file_names(container.current_entries()), vec!["a.jar"]);
    assert_eq!(container.status(), ContainerStatus::UpdateRequested);
    assert_eq!(fx.requester.count(), 1);

    assert_eq!(file_names(container.current_entries()), vec!["a.jar"]);
    assert_eq!(fx.requester.count(), 1);

    let replacements = fx.requester.replacements.lock().unwrap();
    let (path, replacement) = &replacements[0];
    assert_eq!(path, container.path());
    assert_eq!(replacement.status(), ContainerStatus::InUse);
    assert_eq!(
        file_names(replacement.cached_entries()),
        vec!["a.jar", "b.jar"]
    );
}

#[test]
fn test_without_requester_stays_in_use() {
    let fx = Fixture::new();
    touch(&fx.lib(), &["a.jar"]);
    let container = DirContainer::new(
        ContainerPath::new("app", "lib"),
        &fx.project,
        ExtensionSet::parse("jar"),
        ContainerContext::new(fx.log.clone()),
    )
    .unwrap();

    touch(&fx.lib(), &["b.jar"]);

    assert_eq!(file_names(container.current_entries()), vec!["a.jar"]);
    assert_eq!(container.status(), ContainerStatus::InUse);
}

#[test]
fn test_failed_rebuild_is_requested_only_once() {
    let fx = Fixture::new();
    touch(&fx.lib(), &["a.jar"]);
    let container = fx.container();

    fs::remove_dir_all(fx.lib()).unwrap();
    fs::File::create(fx.lib()).unwrap();

    assert_eq!(file_names(container.current_entries()), vec!["a.jar"]);
    assert_eq!(container.status(), ContainerStatus::UpdateRequested);
    assert_eq!(fx.requester.count(), 0);
    let errors = fx.log.messages(Severity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Failed to rebuild container"));

    assert_eq!(file_names(container.current_entries()), vec!["a.jar"]);
    assert_eq!(fx.log.messages(Severity::Error).len(), 1);
}

#[test]
fn test_missing_directory_created_with_warning() {
    let fx = Fixture::new();
    assert!(!fx.lib().exists());

    let container = fx.container();

    assert!(fx.lib().is_dir());
    assert!(container.cached_entries().is_empty());
    assert_eq!(fx.log.messages(Severity::Warning).len(), 1);
}

#[test]
fn test_permissive_mode_is_reported() {
    let fx = Fixture::new();
    touch(&fx.lib(), &["a.jar", "notes.txt"]);

    let container = DirContainer::new(
        ContainerPath::new("app", "lib"),
        &fx.project,
        ExtensionSet::new(),
        ContainerContext::new(fx.log.clone()),
    )
    .unwrap();

    assert!(container.config().is_permissive());
    assert_eq!(file_names(container.cached_entries()), vec!["a.jar", "notes.txt"]);
    assert!(
        fx.log
            .messages(Severity::Info)
            .iter()
            .any(|m| m.contains("No extensions configured"))
    );
}

#[test]
fn test_membership() {
    let fx = Fixture::new();
    touch(&fx.lib(), &["a.jar"]);
    let container = fx.container();

    assert!(container.is_member(&fx.lib().join("a.jar")));
    assert!(container.is_member(&fx.lib().join("not-yet-there.JAR")));
    assert!(container.is_member(&fx.lib().join("a-src.jar")));
    assert!(!container.is_member(&fx.lib().join("notes.txt")));
    assert!(!container.is_member(&fx.lib().join("sub").join("b.jar")));
    assert!(!container.is_member(&fx.project.root.join("a.jar")));
    assert!(container.is_member(&fx.lib().join("..").join("lib").join("a.jar")));
    assert!(container.is_member(&fx.lib().join(".").join("a.jar")));
    assert!(!container.is_member(&fx.lib().join("..").join("a.jar")));
}

#[test]
fn test_registry_swaps_in_replacement() {
    let fx = Fixture::new();
    touch(&fx.lib(), &["a.jar"]);
    let registry = Arc::new(ContainerRegistry::new());
    let initializer = DirContainerInitializer::new(registry.clone()).with_log_sink(fx.log.clone());
    let entry = ContainerEntry::for_directory(&fx.project, "lib", "jar");

    let original = initializer.initialize(&entry, &fx.project).unwrap();
    assert!(Arc::ptr_eq(
        &original,
        &initializer.lookup_existing(&entry.path).unwrap()
    ));

    touch(&fx.lib(), &["b.jar"]);
    assert_eq!(file_names(&original.entries()), vec!["a.jar"]);

    let current = registry.get(&entry.path).unwrap();
    assert!(!Arc::ptr_eq(&original, &current));
    assert_eq!(file_names(&current.entries()), vec!["a.jar", "b.jar"]);
    assert_eq!(current.status(), ContainerStatus::InUse);
    assert_eq!(original.status(), ContainerStatus::UpdateRequested);
}

#[test]
fn test_initializer_rejects_invalid_directory() {
    let fx = Fixture::new();
    touch(&fx.project.root, &["lib"]);
    let registry = Arc::new(ContainerRegistry::new());
    let initializer = DirContainerInitializer::new(registry.clone()).with_log_sink(fx.log.clone());
    let entry = ContainerEntry::for_directory(&fx.project, "lib", "jar");

    let err = initializer.initialize(&entry, &fx.project).unwrap_err();

    assert!(matches!(err, ContainerError::InvalidContainer { .. }));
    assert!(registry.is_empty());
    let warnings = fx.log.messages(Severity::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("is not a directory"));
}

#[test]
fn test_entry_without_extensions_is_permissive() {
    let fx = Fixture::new();
    touch(&fx.lib(), &["a.jar", "b.war"]);
    let registry = Arc::new(ContainerRegistry::new());
    let initializer = DirContainerInitializer::new(registry).with_log_sink(fx.log.clone());

    let container = initializer
        .initialize(&ContainerEntry::new(ContainerPath::new("app", "lib")), &fx.project)
        .unwrap();

    assert_eq!(file_names(&container.entries()), vec!["a.jar", "b.war"]);
    assert!(!container.is_member(&fx.lib().join("a.jar")));
}

#[test]
fn test_view_filter_hides_members() {
    let fx = Fixture::new();
    touch(&fx.lib(), &["a.jar"]);
    let registry = Arc::new(ContainerRegistry::new());
    let initializer = DirContainerInitializer::new(registry.clone()).with_log_sink(fx.log.clone());
    initializer
        .initialize(&ContainerEntry::for_directory(&fx.project, "lib", "jar"), &fx.project)
        .unwrap();

    let filter = ContainerDirFilter::new(registry);
    let other = ProjectContext::new("other", fx.project.root.clone());

    assert!(!filter.select(&fx.lib().join("a.jar"), &fx.project));
    assert!(filter.select(&fx.lib().join("notes.txt"), &fx.project));
    assert!(filter.select(&fx.project.root.join("build.gradle"), &fx.project));
    assert!(filter.select(&fx.lib().join("a.jar"), &other));
}
