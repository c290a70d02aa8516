//! Blog services for the bytebound document store.
//!
//! Posts, comments, users and likes each get a service that works on
//! [bytebound::collection::DocumentStore] handles; [BlogServices] wires them
//! all to one database. Stored documents are turned into [Post], [Comment]
//! and [User] values with defaults for anything missing, and post content
//! written as a JSON envelope is unpacked by [normalize::normalize_post].
//!
//! Timestamps are stored and returned as RFC 3339 UTC strings.

pub mod error;
pub mod format;
pub mod normalize;
pub mod schema;
pub mod seed;
pub mod service;
mod services;

pub use error::{BlogError, BlogResult};
pub use format::{Author, Comment, Post, User};
pub use service::{CommentService, LikeService, NewComment, NewPost, PostService, UserService};
pub use services::BlogServices;
