//! Durable key-value storage behind the document store.
//!
//! Collections are persisted through a [KeyValueStore], a string-to-string
//! store with a small provider trait. Two providers ship with the core crate:
//! [InMemoryKeyValueStore] and [FileKeyValueStore].

mod file;
mod key_value_store;
mod memory;

pub use file::*;
pub use key_value_store::*;
pub use memory::*;
