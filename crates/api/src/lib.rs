pub mod cap;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use cap::{
    ClasspathContributor, ConfigurationPage, LogSink, Severity, SourceLocator, UpdateRequester,
};
pub use error::{ApiError, ApiResult, ValidationError};
pub use models::*;
