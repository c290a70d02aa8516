use bytebound::collection::DocumentStore;
use bytebound::doc;

use super::bump_counter;
use crate::format::now;

/// Post likes. Keeps each post's `likes_count` in step.
#[derive(Clone)]
pub struct LikeService {
    likes: DocumentStore,
    posts: DocumentStore,
}

impl LikeService {
    pub fn new(likes: DocumentStore, posts: DocumentStore) -> Self {
        LikeService { likes, posts }
    }

    /// Likes the post if `user_id` has not liked it yet, otherwise removes
    /// the like. Returns whether the post is liked afterwards.
    pub fn toggle_like(&self, blog_id: &str, user_id: &str) -> bool {
        let key = doc! { blog_id: blog_id, user_id: user_id };

        if self.likes.find_one(&key).is_some() {
            self.likes.delete_one(&key);
            bump_counter(&self.posts, blog_id, "likes_count", -1);
            log::debug!("User {} unliked post {}", user_id, blog_id);
            false
        } else {
            self.likes.insert_one(doc! {
                id: (uuid::Uuid::new_v4().to_string()),
                blog_id: blog_id,
                user_id: user_id,
                created_at: (now()),
            });
            bump_counter(&self.posts, blog_id, "likes_count", 1);
            log::debug!("User {} liked post {}", user_id, blog_id);
            true
        }
    }

    pub fn has_liked(&self, blog_id: &str, user_id: &str) -> bool {
        self.likes
            .find_one(&doc! { blog_id: blog_id, user_id: user_id })
            .is_some()
    }

    pub fn count_likes(&self, blog_id: &str) -> u64 {
        self.likes.count_documents(&doc! { blog_id: blog_id })
    }
}
