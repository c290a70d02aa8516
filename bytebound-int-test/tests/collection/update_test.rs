use bytebound::common::Value;
use bytebound::doc;
use bytebound_int_test::test_util::{cleanup, create_test_context, insert_test_documents, run_test};

#[test]
fn test_set_fields() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("blogs")?;
            insert_test_documents(&coll);

            let result = coll.update_one(
                &doc! { id: "p2" },
                &doc! { "$set": { status: "published", category: "Databases" } },
            );
            assert_eq!(result.matched_count, 1);
            assert_eq!(result.modified_count, 1);

            let post = coll.find_one(&doc! { id: "p2" }).unwrap();
            assert_eq!(post.get_str("status"), Some("published"));
            assert_eq!(post.get_str("category"), Some("Databases"));
            assert_eq!(coll.count_documents(&doc! { status: "published" }), 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_increment_accumulates() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("blogs")?;
            coll.insert_one(doc! { id: "p1", likes_count: 5 });

            for _ in 0..3 {
                coll.update_one(&doc! { id: "p1" }, &doc! { "$inc": { likes_count: 2 } });
            }
            coll.update_one(&doc! { id: "p1" }, &doc! { "$inc": { likes_count: (-1), views_count: 1 } });

            let post = coll.find_one(&doc! { id: "p1" }).unwrap();
            assert_eq!(post.get("likes_count"), Some(&Value::from(10)));
            assert_eq!(post.get("views_count"), Some(&Value::from(1)));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_set_then_increment_in_one_update() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("blogs")?;
            coll.insert_one(doc! { id: "p1", views_count: 1 });

            coll.update_one(
                &doc! { id: "p1" },
                &doc! { "$inc": { views_count: 1 }, "$set": { views_count: 10 } },
            );
            let post = coll.find_one(&doc! { id: "p1" }).unwrap();
            assert_eq!(post.get("views_count"), Some(&Value::from(11)));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_identity_is_immutable() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("users")?;
            coll.insert_one(doc! { id: "u1", name: "Ada" });

            coll.update_one(&doc! { id: "u1" }, &doc! { "$set": { id: "u2", name: "Grace" } });

            assert!(coll.find_one(&doc! { id: "u2" }).is_none());
            let user = coll.find_one(&doc! { id: "u1" }).unwrap();
            assert_eq!(user.get_str("name"), Some("Grace"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_without_match() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("blogs")?;
            insert_test_documents(&coll);
            let before = coll.find(&doc! {}).to_vec();

            let result = coll.update_one(&doc! { id: "nope" }, &doc! { "$set": { title: "x" } });
            assert_eq!(result.matched_count, 0);
            assert_eq!(result.modified_count, 0);
            assert_eq!(coll.find(&doc! {}).to_vec(), before);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_first_match_only() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("likes")?;
            coll.insert_one(doc! { id: "l1", blog_id: "p1" });
            coll.insert_one(doc! { id: "l2", blog_id: "p1" });

            coll.update_one(&doc! { blog_id: "p1" }, &doc! { "$set": { seen: true } });
            assert_eq!(coll.count_documents(&doc! { seen: true }), 1);
            assert_eq!(
                coll.find_one(&doc! { id: "l1" }).unwrap().get("seen"),
                Some(&Value::from(true))
            );
            Ok(())
        },
        cleanup,
    )
}
