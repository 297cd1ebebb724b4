pub mod config;
pub mod entry;
pub mod extension;
pub mod path;
pub mod project;

pub use config::*;
pub use entry::*;
pub use extension::*;
pub use path::*;
pub use project::*;
