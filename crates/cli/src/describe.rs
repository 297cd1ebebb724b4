use crate::resolve::print_entries;
use dircontainer_api::{ContainerEntry, ContainerPath, ExtraAttribute, ProjectContext};
use dircontainer_core::{ContainerRegistry, DirContainerInitializer};
use std::path::PathBuf;
use std::sync::Arc;

pub fn run(
    project_root: PathBuf,
    container_path: &str,
    extensions: Option<String>,
    legacy: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = crate::normalize_path(&project_root)?;

    let (project, mut entry) = if legacy {
        let project = ProjectContext::from_root(root);
        let (path, exts) = ContainerPath::parse_legacy(container_path, &project.name)?;
        let entry = ContainerEntry::new(path)
            .with_attribute(ExtraAttribute::FileExtensions, exts.to_string());
        (project, entry)
    } else {
        let path = ContainerPath::parse(container_path)?;
        let project = ProjectContext::new(path.project(), root);
        (project, ContainerEntry::new(path))
    };

    if let Some(extensions) = extensions {
        entry = entry.with_attribute(ExtraAttribute::FileExtensions, extensions);
    }

    let initializer = DirContainerInitializer::new(Arc::new(ContainerRegistry::new()));
    let container = initializer.initialize(&entry, &project)?;

    let extensions = if container.extensions().is_empty() {
        "(any)".to_string()
    } else {
        container.extensions().to_string()
    };

    println!("Container:   {}", container.path());
    println!("Description: {}", initializer.description(container.path()));
    println!("Directory:   {}", container.directory().display());
    println!("Extensions:  {}", extensions);
    println!("Status:      {}", container.status());
    println!();
    print_entries(container.cached_entries());

    Ok(())
}
