use dircontainer_api::ContainerPath;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("Could not create container directory {}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid directory container {path}: {} is not a directory", .directory.display())]
    InvalidContainer {
        path: ContainerPath,
        directory: PathBuf,
    },
    #[error("Container {0} belongs to a different project")]
    ProjectMismatch(ContainerPath),
}

pub type Result<T> = std::result::Result<T, ContainerError>;
