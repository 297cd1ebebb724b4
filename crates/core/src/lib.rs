pub mod container;
pub mod error;
pub mod initializer;
pub mod logging;
pub mod page;
pub mod registry;
pub mod resolver;
pub mod view_filter;

pub use container::{ContainerContext, ContainerStatus, DirContainer, entries_differ};
pub use error::{ContainerError, Result};
pub use initializer::DirContainerInitializer;
pub use logging::TracingLogSink;
pub use page::DirContainerPage;
pub use registry::ContainerRegistry;
pub use resolver::{DirectoryResolver, SuffixSourceLocator, resolve};
pub use view_filter::ContainerDirFilter;
