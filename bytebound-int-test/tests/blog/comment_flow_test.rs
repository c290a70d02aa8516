use bytebound::doc;
use bytebound_blog::{BlogError, BlogServices, NewComment, NewPost};
use bytebound_int_test::test_util::{cleanup, create_test_context, run_test};

use super::post_flow_test::store_error;

#[test]
fn test_comments_and_likes_keep_counts() {
    run_test(
        create_test_context,
        |ctx| {
            let blog = BlogServices::new(&ctx.db()).map_err(store_error)?;
            let post_id = blog.posts().create_post(NewPost::new("Counting", "Body"));

            let first = blog
                .comments()
                .create_comment(NewComment::new(&post_id, "u1", "First"));
            blog.comments()
                .create_comment(NewComment::new(&post_id, "u2", "Second"));
            assert!(blog.likes().toggle_like(&post_id, "u1"));
            assert!(blog.likes().toggle_like(&post_id, "u2"));
            assert!(!blog.likes().toggle_like(&post_id, "u2"));

            let post = blog.posts().get_post_by_id(&post_id).map_err(store_error)?;
            assert_eq!(post.comments_count, 2);
            assert_eq!(post.likes_count, 1);
            assert_eq!(blog.likes().count_likes(&post_id), 1);
            assert!(blog.likes().has_liked(&post_id, "u1"));
            assert!(!blog.likes().has_liked(&post_id, "u2"));

            assert!(matches!(
                blog.comments().delete_comment(&first, "u2"),
                Err(BlogError::Unauthorized(_))
            ));
            blog.comments()
                .delete_comment(&first, "u1")
                .map_err(store_error)?;

            let post = blog.posts().get_post_by_id(&post_id).map_err(store_error)?;
            assert_eq!(post.comments_count, 1);

            let remaining = blog.comments().get_comments_by_blog_id(&post_id);
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].content, "Second");
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_counts_follow_legacy_identity() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let blog = BlogServices::new(&db).map_err(store_error)?;
            db.collection("blogs")?
                .insert_one(doc! { _id: "legacy", title: "Imported" });

            assert!(blog.likes().toggle_like("legacy", "u1"));
            blog.comments()
                .create_comment(NewComment::new("legacy", "u2", "Welcome back"));

            let post = blog.posts().get_post_by_id("legacy").map_err(store_error)?;
            assert_eq!(post.likes_count, 1);
            assert_eq!(post.comments_count, 1);
            assert_eq!(blog.likes().count_likes("legacy"), 1);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_comment_edit_by_owner() {
    run_test(
        create_test_context,
        |ctx| {
            let blog = BlogServices::new(&ctx.db()).map_err(store_error)?;
            let id = blog
                .comments()
                .create_comment(NewComment::new("p1", "u1", "Teh"));

            assert!(matches!(
                blog.comments().update_comment(&id, "Stolen", "u9"),
                Err(BlogError::Unauthorized(_))
            ));
            blog.comments()
                .update_comment(&id, "The", "u1")
                .map_err(store_error)?;

            let mine = blog.comments().get_comments_by_user_id("u1");
            assert_eq!(mine.len(), 1);
            assert_eq!(mine[0].content, "The");
            assert!(mine[0].updated_at.is_some());
            Ok(())
        },
        cleanup,
    )
}
