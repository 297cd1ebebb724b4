pub mod contributor;
pub mod locator;
pub mod log;
pub mod page;

pub use contributor::*;
pub use locator::*;
pub use log::*;
pub use page::*;
