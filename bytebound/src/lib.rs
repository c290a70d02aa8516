//! # ByteBound - Embedded Document Store
//!
//! ByteBound keeps named collections of schemaless documents in memory and
//! persists each collection, as one JSON array, into a durable string
//! key-value store. Collections are queried and updated with a small
//! MongoDB-style DSL.
//!
//! ## Key Features
//!
//! - **Embedded**: No separate server process required
//! - **MongoDB-style queries**: equality, `$ne`, `$in`, `$regex`, `$or`, `$and`
//! - **Updates**: `$set` and `$inc`
//! - **Cursors**: stable sort, skip and limit
//! - **Pluggable storage**: in-memory, file and fjall key-value stores
//! - **Clean API**: PIMPL handles that are cheap to clone and share state
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bytebound::common::SortOrder;
//! use bytebound::database::Database;
//! use bytebound::doc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::builder().open()?;
//! let posts = db.collection("blogs")?;
//!
//! let inserted = posts.insert_one(doc! {
//!     title: "Hello",
//!     status: "published",
//!     tags: ["intro"],
//! });
//!
//! posts.update_one(
//!     &doc! { id: (inserted.inserted_id.clone()) },
//!     &doc! { "$inc": { views_count: 1 } },
//! );
//!
//! let latest = posts
//!     .find(&doc! { status: { "$ne": "archived" } })
//!     .sort("created_at", SortOrder::Descending)
//!     .limit(5)
//!     .to_vec();
//!
//! db.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - Documents, cursors and the document store
//! - [`common`] - Values, sort order and constants
//! - [`database`] - Database handle
//! - [`database_builder`] - Builder for opening a database
//! - [`database_config`] - Database configuration
//! - [`errors`] - Error types and result definitions
//! - [`filter`] - Query filters
//! - [`store`] - Key-value storage abstractions

pub mod collection;
pub mod common;
pub mod database;
pub mod database_builder;
pub mod database_config;
pub mod errors;
pub mod filter;
pub mod store;
