//! Document source implementations.

mod document_source;
mod file;
mod format;
mod inline;

pub use document_source::DocumentSource;
pub use file::FileSource;
pub use format::Format;
pub use inline::InlineSource;
