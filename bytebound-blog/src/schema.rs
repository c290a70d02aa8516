//! Collection names and field values shared by the services.

pub const BLOGS: &str = "blogs";
pub const USERS: &str = "users";
pub const COMMENTS: &str = "comments";
pub const LIKES: &str = "likes";

pub const STATUS_PUBLISHED: &str = "published";
pub const STATUS_ARCHIVED: &str = "archived";

pub const DEFAULT_CATEGORY: &str = "Uncategorized";
pub const DEFAULT_TITLE: &str = "Untitled";
pub const ANONYMOUS: &str = "Anonymous";

/// Fields callers may never overwrite through an update.
pub(crate) const PROTECTED_FIELDS: [&str; 2] = ["id", "_id"];
