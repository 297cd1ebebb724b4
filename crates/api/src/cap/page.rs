use crate::error::ValidationError;
use crate::models::{ContainerEntry, ProjectContext};

/// Collects a directory and an extension list from a user and turns them into
/// a container entry.
pub trait ConfigurationPage {
    fn initialize(&mut self, project: ProjectContext);

    /// Pre-fill the page from an existing entry; `None` starts a new one.
    fn set_selection(&mut self, entry: Option<&ContainerEntry>);

    /// Validate the current input.
    fn finish(&self) -> Result<(), ValidationError>;

    /// The entry described by the current input. Validates first.
    fn selection(&self) -> Result<ContainerEntry, ValidationError>;
}
