//! Common types shared across the crate: field values, sort order and constants.

mod constants;
mod sort_order;
mod value;

pub use constants::*;
pub use sort_order::*;
pub use value::*;
