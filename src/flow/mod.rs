pub mod component;
pub mod conversion;
pub mod definition;
pub mod document;
mod lenient;

pub use component::*;
pub use conversion::*;
pub use definition::*;
pub use document::*;
