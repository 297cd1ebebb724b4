#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Malformed container path '{path}': {reason}")]
    MalformedPath { path: String, reason: &'static str },
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Rejections raised while collecting a container configuration from a user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error(
        "Invalid extension list '{0}': expected a comma separated list of lowercase extensions, e.g. jar,zip"
    )]
    InvalidExtensions(String),
    #[error("Directory '{directory}' must be located inside project '{project}'")]
    DirectoryOutsideProject { directory: String, project: String },
    #[error("Configuration page was not initialized with a project")]
    MissingProject,
}
