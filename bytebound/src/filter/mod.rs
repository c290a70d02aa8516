//! Query filters for selecting documents from collections.
//!
//! Queries are written as documents in the MongoDB style and turned into
//! [Filter] trees with [Filter::parse] or [Filter::equality]. The same filters
//! can be composed directly with the fluent API.
//!
//! # Examples
//!
//! ```rust,ignore
//! use bytebound::doc;
//! use bytebound::filter::{field, Filter};
//!
//! // From a query document
//! let filter = Filter::parse(&doc! {
//!     status: { "$ne": "archived" },
//!     tags: { "$in": ["rust"] },
//! });
//!
//! // The same condition with the fluent API
//! let filter = field("status").ne("archived").and(field("tags").in_array(vec!["rust"]));
//! ```
//!
//! # Supported Operators
//!
//! - **Equality**: plain values, `$ne`
//! - **Array**: `$in`
//! - **Pattern**: `$regex` with `$options`
//! - **Logical**: `$and`, `$or`
//!
//! Anything else is ignored.

mod filter;
mod fluent;
mod query;

mod basic_filters;
mod logical_filters;
mod pattern_filters;

pub(crate) use basic_filters::*;
pub use filter::*;
pub use fluent::*;
pub(crate) use logical_filters::*;
pub(crate) use pattern_filters::*;
