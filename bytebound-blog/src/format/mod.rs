//! Conversion of stored documents into the shapes the services return.

mod comment;
mod common;
mod post;
mod user;

pub use comment::*;
pub use common::*;
pub use post::*;
pub use user::*;
