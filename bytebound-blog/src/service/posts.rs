use bytebound::collection::{Document, DocumentStore};
use bytebound::common::{SortOrder, Value};
use bytebound::doc;

use super::{author_value, inc, locate, strip_fields};
use crate::error::{BlogError, BlogResult};
use crate::format::{now, Post};
use crate::schema::{STATUS_ARCHIVED, STATUS_PUBLISHED};

const EXCERPT_CHARS: usize = 150;
const CHARS_PER_MINUTE: usize = 1000;

/// Input for [PostService::create_post]. Unset fields get derived or default
/// values.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub user_id: Option<String>,
    /// A name string or an `{ name, avatar }` document.
    pub author: Option<Value>,
    pub featured: bool,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub slug: Option<String>,
    pub featured_image: Option<String>,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub likes_count: Option<i64>,
    pub comments_count: Option<i64>,
    pub views_count: Option<i64>,
    pub reading_time: Option<i64>,
}

impl NewPost {
    pub fn new(title: &str, content: &str) -> Self {
        NewPost {
            title: title.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    fn into_document(self) -> Document {
        let timestamp = now();
        let excerpt = self.excerpt.unwrap_or_else(|| excerpt_of(&self.content));
        let slug = self.slug.unwrap_or_else(|| slugify(&self.title));
        let reading_time = self
            .reading_time
            .unwrap_or_else(|| reading_time_of(&self.content));
        let featured_image = self.featured_image.or(self.image).or(self.image_url);

        let mut document = doc! {
            id: (uuid::Uuid::new_v4().to_string()),
            title: (self.title),
            content: (self.content),
            excerpt: excerpt,
            featured_image: featured_image,
            user_id: (self.user_id.unwrap_or_default()),
            created_at: (timestamp.clone()),
            updated_at: timestamp,
            featured: (self.featured),
            published: true,
            tags: (self.tags),
            slug: slug,
            likes_count: (self.likes_count.unwrap_or(0)),
            comments_count: (self.comments_count.unwrap_or(0)),
            views_count: (self.views_count.unwrap_or(0)),
            reading_time: reading_time,
            status: STATUS_PUBLISHED,
        };
        if let Some(category) = self.category {
            document.put("category", category);
        }
        if let Some(author) = self.author {
            document.put("author", author_value(author));
        }
        document
    }
}

/// First 150 characters of the content followed by `...`.
fn excerpt_of(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}

/// Lowercased title with every run of whitespace replaced by `-`.
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }
    slug
}

/// Minutes to read at a thousand characters a minute, rounded up.
fn reading_time_of(content: &str) -> i64 {
    content.chars().count().div_ceil(CHARS_PER_MINUTE) as i64
}

/// Creation, retrieval and search of blog posts.
#[derive(Clone)]
pub struct PostService {
    posts: DocumentStore,
}

impl PostService {
    pub fn new(posts: DocumentStore) -> Self {
        PostService { posts }
    }

    /// Stores a new published post and returns its id.
    pub fn create_post(&self, post: NewPost) -> String {
        let result = self.posts.insert_one(post.into_document());
        let id = result.inserted_id.to_text();
        log::debug!("Created post {}", id);
        id
    }

    /// Applies `updates` to a post with `$set`.
    ///
    /// `id`, `_id` and `created_at` are never overwritten, a string author
    /// becomes `{ name }` and `updated_at` is stamped.
    pub fn update_post(&self, id: &str, updates: &Document) -> BlogResult<()> {
        let located = locate(&self.posts, id).ok_or_else(|| BlogError::not_found("Post", id))?;

        let mut changes = strip_fields(updates, &["created_at"]);
        if let Some(author) = changes.remove("author") {
            changes.put("author", author_value(author));
        }
        changes.put("updated_at", now());

        let result = self
            .posts
            .update_one(&located.selector, &doc! { "$set": changes });
        if result.matched_count == 0 {
            return Err(BlogError::not_found("Post", id));
        }
        Ok(())
    }

    /// Archives a post. Archived posts drop out of every listing but stay
    /// stored.
    pub fn delete_post(&self, id: &str) -> BlogResult<()> {
        let located = locate(&self.posts, id).ok_or_else(|| BlogError::not_found("Post", id))?;
        let result = self.posts.update_one(
            &located.selector,
            &doc! { "$set": { status: STATUS_ARCHIVED, updated_at: (now()) } },
        );
        if result.matched_count == 0 {
            return Err(BlogError::not_found("Post", id));
        }
        Ok(())
    }

    /// Removes a post from the store.
    pub fn hard_delete_post(&self, id: &str) -> BlogResult<()> {
        let located = locate(&self.posts, id).ok_or_else(|| BlogError::not_found("Post", id))?;
        if self.posts.delete_one(&located.selector).deleted_count == 0 {
            return Err(BlogError::not_found("Post", id));
        }
        log::debug!("Hard deleted post {}", id);
        Ok(())
    }

    /// Every post that is not archived, newest first.
    pub fn get_all_posts(&self) -> Vec<Post> {
        self.list(&doc! { status: { "$ne": STATUS_ARCHIVED } }, None)
    }

    /// Returns a post and counts the view.
    ///
    /// The returned post already includes the new view.
    pub fn get_post_by_id(&self, id: &str) -> BlogResult<Post> {
        let located = locate(&self.posts, id).ok_or_else(|| BlogError::not_found("Post", id))?;
        self.posts
            .update_one(&located.selector, &inc("views_count", 1));

        let document = self
            .posts
            .find_one(&located.selector)
            .unwrap_or(located.document);
        Ok(Post::from_document(&document))
    }

    /// Posts written by `user_id`, newest first.
    pub fn get_posts_by_user_id(&self, user_id: &str) -> Vec<Post> {
        self.list(&doc! { user_id: user_id }, None)
    }

    /// Up to `count` featured, published posts, newest first.
    pub fn get_featured_posts(&self, count: usize) -> Vec<Post> {
        self.list(
            &doc! { featured: true, status: STATUS_PUBLISHED },
            Some(count),
        )
    }

    /// Published posts carrying `tag`, newest first.
    pub fn get_posts_by_tag(&self, tag: &str) -> Vec<Post> {
        self.list(
            &doc! { tags: { "$in": [tag] }, status: STATUS_PUBLISHED },
            None,
        )
    }

    /// Published posts whose title or content contains `query` (ignoring
    /// case) or whose tags include it exactly, newest first.
    ///
    /// The query is matched literally; regex metacharacters have no special
    /// meaning.
    pub fn search_posts(&self, query: &str) -> Vec<Post> {
        let pattern = regex::escape(query);
        let filter = doc! {
            "$and": [
                { status: STATUS_PUBLISHED },
                {
                    "$or": [
                        { title: { "$regex": (pattern.as_str()), "$options": "i" } },
                        { content: { "$regex": (pattern.as_str()), "$options": "i" } },
                        { tags: { "$in": [query] } }
                    ]
                }
            ]
        };
        self.list(&filter, None)
    }

    fn list(&self, filter: &Document, limit: Option<usize>) -> Vec<Post> {
        let mut cursor = self
            .posts
            .find(filter)
            .sort("created_at", SortOrder::Descending);
        if let Some(limit) = limit {
            cursor = cursor.limit(limit);
        }
        cursor.iter().map(Post::from_document).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytebound::database::Database;

    fn service() -> (PostService, DocumentStore) {
        let db = Database::builder().open().unwrap();
        let posts = db.collection("blogs").unwrap();
        (PostService::new(posts.clone()), posts)
    }

    fn stored(id: &str, created_at: &str, extra: Document) -> Document {
        let mut document = doc! {
            id: id,
            title: (format!("Post {}", id)),
            content: "Body",
            status: STATUS_PUBLISHED,
            created_at: created_at,
        };
        document.merge(&extra);
        document
    }

    #[test]
    fn test_derived_fields() {
        assert_eq!(excerpt_of("short"), "short...");
        assert_eq!(excerpt_of(&"é".repeat(200)).chars().count(), 153);
        assert_eq!(slugify("Hello   Big\tWorld"), "hello-big-world");
        assert_eq!(slugify("Trailing "), "trailing-");
        assert_eq!(reading_time_of(""), 0);
        assert_eq!(reading_time_of(&"a".repeat(1000)), 1);
        assert_eq!(reading_time_of(&"a".repeat(1001)), 2);
    }

    #[test]
    fn test_create_post() {
        let (service, posts) = service();
        let mut post = NewPost::new("My First Post", "Hello there");
        post.author = Some(Value::from("Ada"));
        post.image_url = Some("/img.png".to_string());
        post.tags = vec!["rust".to_string()];
        let id = service.create_post(post);

        let stored = posts.find_one(&doc! { id: (id.as_str()) }).unwrap();
        assert_eq!(stored.get_str("slug"), Some("my-first-post"));
        assert_eq!(stored.get_str("excerpt"), Some("Hello there..."));
        assert_eq!(stored.get_str("status"), Some("published"));
        assert_eq!(stored.get_str("featured_image"), Some("/img.png"));
        assert_eq!(stored.get("author"), Some(&Value::from(doc! { name: "Ada" })));
        assert_eq!(stored.get("reading_time"), Some(&Value::from(1)));
        assert_eq!(stored.get("likes_count"), Some(&Value::from(0)));
        assert_eq!(stored.get("published"), Some(&Value::from(true)));
    }

    #[test]
    fn test_update_post() {
        let (service, posts) = service();
        posts.insert_one(stored("p1", "2024-01-01T00:00:00.000Z", doc! {}));

        service
            .update_post(
                "p1",
                &doc! {
                    id: "hijack",
                    created_at: "1999-01-01T00:00:00.000Z",
                    title: "Renamed",
                    author: "Grace",
                },
            )
            .unwrap();

        let post = posts.find_one(&doc! { id: "p1" }).unwrap();
        assert_eq!(post.get_str("title"), Some("Renamed"));
        assert_eq!(post.get_str("created_at"), Some("2024-01-01T00:00:00.000Z"));
        assert_eq!(post.get("author"), Some(&Value::from(doc! { name: "Grace" })));
        assert!(post.contains_key("updated_at"));
        assert!(posts.find_one(&doc! { id: "hijack" }).is_none());

        let err = service.update_post("missing", &doc! { title: "x" }).unwrap_err();
        assert!(matches!(err, BlogError::NotFound { entity: "Post", .. }));
    }

    #[test]
    fn test_soft_and_hard_delete() {
        let (service, posts) = service();
        posts.insert_one(stored("p1", "2024-01-01T00:00:00.000Z", doc! {}));
        posts.insert_one(stored("p2", "2024-01-02T00:00:00.000Z", doc! {}));

        service.delete_post("p1").unwrap();
        let archived = posts.find_one(&doc! { id: "p1" }).unwrap();
        assert_eq!(archived.get_str("status"), Some("archived"));

        let ids: Vec<String> = service.get_all_posts().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["p2"]);

        service.hard_delete_post("p1").unwrap();
        assert_eq!(posts.count_documents(&doc! {}), 1);
        assert!(matches!(
            service.hard_delete_post("p1"),
            Err(BlogError::NotFound { .. })
        ));
        assert!(matches!(service.delete_post("p1"), Err(BlogError::NotFound { .. })));
    }

    #[test]
    fn test_get_all_posts_newest_first() {
        let (service, posts) = service();
        posts.insert_one(stored("old", "2024-01-01T00:00:00.000Z", doc! {}));
        posts.insert_one(stored("new", "2024-03-01T00:00:00.000Z", doc! {}));
        posts.insert_one(stored("mid", "2024-02-01T00:00:00.000Z", doc! { status: "draft" }));

        let ids: Vec<String> = service.get_all_posts().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_get_post_by_id_counts_views() {
        let (service, posts) = service();
        posts.insert_one(stored("p1", "2024-01-01T00:00:00.000Z", doc! { views_count: 4 }));

        assert_eq!(service.get_post_by_id("p1").unwrap().views_count, 5);
        assert_eq!(service.get_post_by_id("p1").unwrap().views_count, 6);
        assert_eq!(
            posts.find_one(&doc! { id: "p1" }).unwrap().get("views_count"),
            Some(&Value::from(6))
        );
        assert!(matches!(
            service.get_post_by_id("nope"),
            Err(BlogError::NotFound { .. })
        ));
    }

    #[test]
    fn test_legacy_identity() {
        let (service, posts) = service();
        posts.insert_one(doc! { _id: "legacy", title: "Old" });
        let post = service.get_post_by_id("legacy").unwrap();
        assert_eq!(post.title, "Old");
        assert_eq!(post.views_count, 1);
        service.update_post("legacy", &doc! { title: "Older" }).unwrap();
        assert_eq!(service.get_post_by_id("legacy").unwrap().title, "Older");
    }

    #[test]
    fn test_listing_filters() {
        let (service, posts) = service();
        posts.insert_one(stored(
            "a",
            "2024-01-01T00:00:00.000Z",
            doc! { featured: true, user_id: "u1", tags: ["rust"] },
        ));
        posts.insert_one(stored(
            "b",
            "2024-01-02T00:00:00.000Z",
            doc! { featured: true, user_id: "u2", tags: ["rust", "db"] },
        ));
        posts.insert_one(stored(
            "c",
            "2024-01-03T00:00:00.000Z",
            doc! { featured: true, user_id: "u1", status: "archived", tags: ["rust"] },
        ));
        posts.insert_one(stored(
            "d",
            "2024-01-04T00:00:00.000Z",
            doc! { featured: false, user_id: "u1", tags: ["db"] },
        ));

        let ids = |posts: Vec<Post>| posts.into_iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(service.get_posts_by_user_id("u1")), vec!["d", "c", "a"]);
        assert_eq!(ids(service.get_featured_posts(3)), vec!["b", "a"]);
        assert_eq!(ids(service.get_featured_posts(1)), vec!["b"]);
        assert_eq!(ids(service.get_posts_by_tag("rust")), vec!["b", "a"]);
        assert_eq!(ids(service.get_posts_by_tag("db")), vec!["d", "b"]);
        assert!(service.get_posts_by_tag("go").is_empty());
    }

    #[test]
    fn test_search_posts() {
        let (service, posts) = service();
        posts.insert_one(stored(
            "a",
            "2024-01-01T00:00:00.000Z",
            doc! { title: "Learning RUST", tags: ["lang"] },
        ));
        posts.insert_one(stored(
            "b",
            "2024-01-02T00:00:00.000Z",
            doc! { title: "Other", content: "why rust?", tags: [] },
        ));
        posts.insert_one(stored(
            "c",
            "2024-01-03T00:00:00.000Z",
            doc! { title: "Tagged", tags: ["rust"] },
        ));
        posts.insert_one(stored(
            "d",
            "2024-01-04T00:00:00.000Z",
            doc! { title: "rust archived", status: "archived" },
        ));
        posts.insert_one(stored(
            "e",
            "2024-01-05T00:00:00.000Z",
            doc! { title: "C++ tips" },
        ));

        let ids = |posts: Vec<Post>| posts.into_iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(service.search_posts("rust")), vec!["c", "b", "a"]);
        assert_eq!(ids(service.search_posts("c++")), vec!["e"]);
        assert!(service.search_posts("(").is_empty());
    }
}
