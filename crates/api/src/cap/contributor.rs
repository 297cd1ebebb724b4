use crate::models::{ContainerPath, LibraryEntry};

/// Anything that contributes library entries to a host classpath model.
pub trait ClasspathContributor: Send + Sync {
    /// Current entries, in classpath order
    fn entries(&self) -> Vec<LibraryEntry>;

    /// User facing label
    fn description(&self) -> String;

    /// Path identifying this contributor in the host model
    fn path(&self) -> &ContainerPath;
}

/// Receives replacement requests from contributors that detected a change.
///
/// Contributors are immutable from the host's point of view: instead of
/// rescanning in place, a stale contributor builds a fresh instance and hands
/// it over here. Implementations swap it in wherever `path` was referenced.
pub trait UpdateRequester<C>: Send + Sync {
    fn request_update(&self, path: &ContainerPath, replacement: C);
}
