use bytebound::doc;
use bytebound_int_test::test_util::{cleanup, create_test_context, insert_test_documents, run_test};

#[test]
fn test_delete_one() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("blogs")?;
            insert_test_documents(&coll);

            let result = coll.delete_one(&doc! { status: "draft" });
            assert_eq!(result.deleted_count, 1);
            assert!(result.acknowledged);
            assert_eq!(coll.count_documents(&doc! {}), 2);
            assert!(coll.find_one(&doc! { id: "p2" }).is_none());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_is_idempotent() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("blogs")?;
            insert_test_documents(&coll);

            assert_eq!(coll.delete_one(&doc! { id: "p1" }).deleted_count, 1);
            assert_eq!(coll.delete_one(&doc! { id: "p1" }).deleted_count, 0);
            assert_eq!(coll.count_documents(&doc! {}), 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_removes_first_match_only() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("likes")?;
            coll.insert_one(doc! { id: "l1", blog_id: "p1", user_id: "u1" });
            coll.insert_one(doc! { id: "l2", blog_id: "p1", user_id: "u2" });

            coll.delete_one(&doc! { blog_id: "p1" });
            assert_eq!(coll.count_documents(&doc! { blog_id: "p1" }), 1);
            assert!(coll.find_one(&doc! { id: "l2" }).is_some());
            Ok(())
        },
        cleanup,
    )
}
