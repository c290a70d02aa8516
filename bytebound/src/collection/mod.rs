mod cursor;
mod document;
mod document_store;
mod local_document_store;
mod registry;
mod update;
mod write_result;

pub use cursor::*;
pub use document::*;
pub use document_store::*;
pub use local_document_store::*;
pub(crate) use registry::*;
pub(crate) use update::*;
pub use write_result::*;
