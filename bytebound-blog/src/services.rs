use bytebound::database::Database;

use crate::error::BlogResult;
use crate::schema::{BLOGS, COMMENTS, LIKES, USERS};
use crate::seed::seed_sample_posts;
use crate::service::{CommentService, LikeService, PostService, UserService};

/// All blog services wired to the collections of one [Database].
///
/// # Examples
///
/// ```rust,ignore
/// use bytebound::database::Database;
/// use bytebound_blog::{BlogServices, NewPost};
///
/// let db = Database::builder().open()?;
/// let blog = BlogServices::new(&db)?;
/// let id = blog.posts().create_post(NewPost::new("Hello", "First post"));
/// blog.likes().toggle_like(&id, "u1");
/// ```
#[derive(Clone)]
pub struct BlogServices {
    posts: PostService,
    comments: CommentService,
    users: UserService,
    likes: LikeService,
}

impl BlogServices {
    pub fn new(db: &Database) -> BlogResult<Self> {
        let posts = db.collection(BLOGS)?;
        Ok(BlogServices {
            comments: CommentService::new(db.collection(COMMENTS)?, posts.clone()),
            likes: LikeService::new(db.collection(LIKES)?, posts.clone()),
            users: UserService::new(db.collection(USERS)?),
            posts: PostService::new(posts),
        })
    }

    /// Like [BlogServices::new], then seeds sample posts into an empty
    /// `blogs` collection.
    pub fn with_samples(db: &Database) -> BlogResult<Self> {
        let services = BlogServices::new(db)?;
        seed_sample_posts(&db.collection(BLOGS)?);
        Ok(services)
    }

    pub fn posts(&self) -> &PostService {
        &self.posts
    }

    pub fn comments(&self) -> &CommentService {
        &self.comments
    }

    pub fn users(&self) -> &UserService {
        &self.users
    }

    pub fn likes(&self) -> &LikeService {
        &self.likes
    }
}
