use bytebound::doc;
use bytebound_blog::{BlogError, BlogServices};
use bytebound_int_test::test_util::{cleanup, create_test_context, run_test};

use super::post_flow_test::store_error;

#[test]
fn test_user_profile_flow() {
    run_test(
        create_test_context,
        |ctx| {
            let blog = BlogServices::new(&ctx.db()).map_err(store_error)?;
            let users = blog.users();

            let id = users.create_user(&doc! {
                username: "ada",
                email: "ada@example.com",
                role: "admin",
                preferences: { theme: "dark", email_notifications: true },
            });

            let updated = users
                .update_user(&id, &doc! { bio: "Analyst", id: "ignored" })
                .map_err(store_error)?;
            assert_eq!(updated.id, id);
            assert_eq!(updated.fields.get_str("bio"), Some("Analyst"));
            assert!(updated.updated_at.is_some());

            let fetched = users.get_user_by_id(&id).unwrap();
            assert_eq!(fetched.email(), Some("ada@example.com"));
            assert_eq!(users.get_all_users().len(), 1);

            users.delete_user(&id).map_err(store_error)?;
            assert!(users.get_user_by_id(&id).is_none());
            assert!(matches!(
                users.delete_user(&id),
                Err(BlogError::NotFound { entity: "User", .. })
            ));
            Ok(())
        },
        cleanup,
    )
}
