use bytebound::common::Value;
use bytebound::doc;
use bytebound_blog::{BlogError, BlogServices, NewPost};
use bytebound_int_test::test_util::{cleanup, create_test_context, run_test};

#[test]
fn test_post_lifecycle() {
    run_test(
        create_test_context,
        |ctx| {
            let blog = BlogServices::new(&ctx.db()).map_err(store_error)?;
            let posts = blog.posts();

            let mut new_post = NewPost::new("Embedded  Stores in Rust", &"x".repeat(2500));
            new_post.author = Some(Value::from("Ada"));
            new_post.tags = vec!["rust".to_string(), "db".to_string()];
            new_post.featured = true;
            let id = posts.create_post(new_post);

            let post = posts.get_post_by_id(&id).map_err(store_error)?;
            assert_eq!(post.slug, "embedded-stores-in-rust");
            assert_eq!(post.reading_time, 3);
            assert_eq!(post.excerpt.chars().count(), 153);
            assert_eq!(post.author.name, "Ada");
            assert_eq!(post.views_count, 1);
            assert_eq!(post.category, "Uncategorized");

            posts
                .update_post(&id, &doc! { title: "Renamed", category: "Systems" })
                .map_err(store_error)?;
            assert_eq!(posts.get_featured_posts(3)[0].title, "Renamed");
            assert_eq!(posts.get_posts_by_tag("db")[0].category, "Systems");
            assert_eq!(posts.search_posts("renamed").len(), 1);

            posts.delete_post(&id).map_err(store_error)?;
            assert!(posts.get_all_posts().is_empty());
            assert!(posts.search_posts("renamed").is_empty());
            assert_eq!(posts.get_post_by_id(&id).map_err(store_error)?.status, "archived");

            posts.hard_delete_post(&id).map_err(store_error)?;
            assert!(matches!(
                posts.get_post_by_id(&id),
                Err(BlogError::NotFound { .. })
            ));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_search_treats_query_literally() {
    run_test(
        create_test_context,
        |ctx| {
            let blog = BlogServices::new(&ctx.db()).map_err(store_error)?;
            let posts = blog.posts();
            posts.create_post(NewPost::new("What is 1+1?", "Arithmetic"));
            posts.create_post(NewPost::new("What is 11?", "More arithmetic"));

            let found = posts.search_posts("1+1");
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].title, "What is 1+1?");
            assert_eq!(posts.search_posts("ARITHMETIC").len(), 2);
            assert!(posts.search_posts("[").is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_envelope_content_is_normalized() {
    run_test(
        create_test_context,
        |ctx| {
            let blog = BlogServices::new(&ctx.db()).map_err(store_error)?;
            let content = r#"{"text": "Snow everywhere", "metadata": {"category": "Travel", "tags": ["alps"]}}"#;
            let id = blog.posts().create_post(NewPost::new("Winter", content));

            let post = blog.posts().get_post_by_id(&id).map_err(store_error)?;
            assert_eq!(post.content, "Snow everywhere");
            assert_eq!(post.category, "Travel");
            assert_eq!(post.tags, vec!["alps"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_seeded_posts() {
    run_test(
        create_test_context,
        |ctx| {
            let blog = BlogServices::with_samples(&ctx.db()).map_err(store_error)?;
            let featured = blog.posts().get_featured_posts(5);
            assert_eq!(featured.len(), 2);
            assert!(featured.iter().all(|post| post.category == "Technology"));

            BlogServices::with_samples(&ctx.db()).map_err(store_error)?;
            assert_eq!(blog.posts().get_all_posts().len(), 2);
            Ok(())
        },
        cleanup,
    )
}

pub(crate) fn store_error(err: BlogError) -> bytebound::errors::StoreError {
    match err {
        BlogError::Store(inner) => inner,
        other => bytebound::errors::StoreError::new(
            &other.to_string(),
            bytebound::errors::ErrorKind::InternalError,
        ),
    }
}
