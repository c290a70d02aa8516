use bytebound::collection::{Document, DocumentStore};
use bytebound::common::{SortOrder, Value};
use bytebound::doc;

use super::{author_value, bump_counter, locate};
use crate::error::{BlogError, BlogResult};
use crate::format::{now, Comment};

/// Input for [CommentService::create_comment].
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub blog_id: String,
    pub user_id: String,
    pub content: String,
    pub parent_id: Option<String>,
    pub author: Option<Value>,
}

impl NewComment {
    pub fn new(blog_id: &str, user_id: &str, content: &str) -> Self {
        NewComment {
            blog_id: blog_id.to_string(),
            user_id: user_id.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }
}

/// Comments on posts. Keeps each post's `comments_count` in step.
#[derive(Clone)]
pub struct CommentService {
    comments: DocumentStore,
    posts: DocumentStore,
}

impl CommentService {
    pub fn new(comments: DocumentStore, posts: DocumentStore) -> Self {
        CommentService { comments, posts }
    }

    /// Stores a comment, bumps the post's comment count and returns the new
    /// comment's id.
    pub fn create_comment(&self, comment: NewComment) -> String {
        let mut document = doc! {
            id: (uuid::Uuid::new_v4().to_string()),
            blog_id: (comment.blog_id.as_str()),
            user_id: (comment.user_id),
            content: (comment.content),
            likes_count: 0,
            created_at: (now()),
        };
        if let Some(parent_id) = comment.parent_id {
            document.put("parent_id", parent_id);
        }
        if let Some(author) = comment.author {
            document.put("author", author_value(author));
        }

        let id = self.comments.insert_one(document).inserted_id.to_text();
        bump_counter(&self.posts, &comment.blog_id, "comments_count", 1);
        log::debug!("Created comment {}", id);
        id
    }

    /// Comments on a post, oldest first.
    pub fn get_comments_by_blog_id(&self, blog_id: &str) -> Vec<Comment> {
        self.list(&doc! { blog_id: blog_id }, SortOrder::Ascending)
    }

    /// Comments written by a user, newest first.
    pub fn get_comments_by_user_id(&self, user_id: &str) -> Vec<Comment> {
        self.list(&doc! { user_id: user_id }, SortOrder::Descending)
    }

    /// Replaces the text of a comment owned by `user_id`.
    pub fn update_comment(&self, id: &str, content: &str, user_id: &str) -> BlogResult<()> {
        let (selector, _) = self.owned(id, user_id, "edit")?;
        self.comments.update_one(
            &selector,
            &doc! { "$set": { content: content, updated_at: (now()) } },
        );
        Ok(())
    }

    /// Removes a comment owned by `user_id` and decrements the post's
    /// comment count.
    pub fn delete_comment(&self, id: &str, user_id: &str) -> BlogResult<()> {
        let (selector, comment) = self.owned(id, user_id, "delete")?;
        self.comments.delete_one(&selector);
        let blog_id = comment.get_or_null("blog_id").to_text();
        bump_counter(&self.posts, &blog_id, "comments_count", -1);
        Ok(())
    }

    /// Locates a comment and checks that `user_id` wrote it.
    fn owned(&self, id: &str, user_id: &str, action: &str) -> BlogResult<(Document, Document)> {
        let located =
            locate(&self.comments, id).ok_or_else(|| BlogError::not_found("Comment", id))?;
        if located.document.get_str("user_id") != Some(user_id) {
            log::warn!("User {} may not {} comment {}", user_id, action, id);
            return Err(BlogError::Unauthorized(format!(
                "You can only {} your own comments",
                action
            )));
        }
        Ok((located.selector, located.document))
    }

    fn list(&self, filter: &Document, order: SortOrder) -> Vec<Comment> {
        self.comments
            .find(filter)
            .sort("created_at", order)
            .iter()
            .map(Comment::from_document)
            .collect()
    }
}
