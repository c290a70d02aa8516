//! Fjall-backed key-value storage for ByteBound.
//!
//! [FjallKeyValueStore] keeps every collection's JSON value in one partition
//! of a [fjall](https://docs.rs/fjall) keyspace on disk.
//!
//! ```rust,ignore
//! use bytebound::database::Database;
//! use bytebound_fjall_adapter::FjallKeyValueStore;
//!
//! let store = FjallKeyValueStore::builder()
//!     .db_path("/var/lib/bytebound")
//!     .open()?;
//! let db = Database::builder().key_value_store(store).open()?;
//! ```

mod config;
mod error;
mod store;

pub use config::*;
pub use error::*;
pub use store::*;
