use dircontainer_api::{ConfigurationPage, ProjectContext};
use dircontainer_core::DirContainerPage;
use std::path::PathBuf;

pub fn run(
    project_root: PathBuf,
    dir: PathBuf,
    extensions: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let project = ProjectContext::from_root(crate::normalize_path(&project_root)?);

    let mut page = DirContainerPage::new();
    page.initialize(project);
    page.set_directory(crate::normalize_path(&dir)?.to_string_lossy());
    if let Some(extensions) = extensions {
        page.set_extensions(extensions);
    }

    let entry = page.selection()?;
    println!("{}", serde_json::to_string_pretty(&entry)?);

    Ok(())
}
