use bytebound::collection::{Document, DocumentStore};
use bytebound::doc;

use super::{locate, strip_fields};
use crate::error::{BlogError, BlogResult};
use crate::format::{now, User};

/// User profiles.
#[derive(Clone)]
pub struct UserService {
    users: DocumentStore,
}

impl UserService {
    pub fn new(users: DocumentStore) -> Self {
        UserService { users }
    }

    /// Stores a profile under a fresh id and returns that id. Any `id`,
    /// `_id` or timestamps in `profile` are replaced.
    pub fn create_user(&self, profile: &Document) -> String {
        let timestamp = now();
        let mut user = doc! { id: (uuid::Uuid::new_v4().to_string()) };
        user.merge(&strip_fields(profile, &["created_at", "updated_at"]));
        user.put("created_at", timestamp.clone());
        user.put("updated_at", timestamp);

        let id = self.users.insert_one(user).inserted_id.to_text();
        log::debug!("Created user {}", id);
        id
    }

    /// Applies `updates` with `$set` and returns the updated profile.
    pub fn update_user(&self, id: &str, updates: &Document) -> BlogResult<User> {
        let located = locate(&self.users, id).ok_or_else(|| BlogError::not_found("User", id))?;

        let mut changes = strip_fields(updates, &[]);
        changes.put("updated_at", now());
        let result = self
            .users
            .update_one(&located.selector, &doc! { "$set": changes });
        if result.matched_count == 0 {
            return Err(BlogError::not_found("User", id));
        }

        self.users
            .find_one(&located.selector)
            .map(|user| User::from_document(&user))
            .ok_or_else(|| BlogError::not_found("User", id))
    }

    pub fn delete_user(&self, id: &str) -> BlogResult<()> {
        let located = locate(&self.users, id).ok_or_else(|| BlogError::not_found("User", id))?;
        if self.users.delete_one(&located.selector).deleted_count == 0 {
            return Err(BlogError::not_found("User", id));
        }
        Ok(())
    }

    pub fn get_user_by_id(&self, id: &str) -> Option<User> {
        locate(&self.users, id).map(|located| User::from_document(&located.document))
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .find_one(&doc! { email: email })
            .map(|user| User::from_document(&user))
    }

    /// Every profile, in insertion order.
    pub fn get_all_users(&self) -> Vec<User> {
        self.users
            .find(&doc! {})
            .iter()
            .map(User::from_document)
            .collect()
    }
}
