use bytebound::common::SortOrder;
use bytebound::doc;
use bytebound_int_test::test_util::{
    cleanup, create_test_context, field_texts, insert_test_documents, is_sorted, run_test,
};

#[test]
fn test_find_all() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("blogs")?;
            insert_test_documents(&coll);

            assert_eq!(coll.find(&doc! {}).len(), 3);
            assert_eq!(coll.count_documents(&doc! {}), 3);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_not_equal() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("blogs")?;
            insert_test_documents(&coll);

            let cursor = coll.find(&doc! { status: { "$ne": "archived" } });
            assert_eq!(field_texts(&cursor, "id"), vec!["p1", "p2"]);

            let cursor = coll.find(&doc! { category: { "$ne": "Travel" } });
            assert_eq!(cursor.len(), 3);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_in_array_field() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("blogs")?;
            insert_test_documents(&coll);

            let cursor = coll.find(&doc! { tags: { "$in": ["rust"] } });
            assert_eq!(field_texts(&cursor, "id"), vec!["p1", "p3"]);

            let cursor = coll.find(&doc! { status: { "$in": ["draft", "archived"] } });
            assert_eq!(field_texts(&cursor, "id"), vec!["p2", "p3"]);

            let cursor = coll.find(&doc! { tags: { "$in": ["go"] } });
            assert!(cursor.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_regex() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("blogs")?;
            insert_test_documents(&coll);

            let cursor = coll.find(&doc! { title: { "$regex": "RUST", "$options": "i" } });
            assert_eq!(field_texts(&cursor, "id"), vec!["p1"]);

            let cursor = coll.find(&doc! { title: { "$regex": "RUST" } });
            assert!(cursor.is_empty());

            let cursor = coll.find(&doc! { title: { "$regex": "^(Old|Embedded)" } });
            assert_eq!(field_texts(&cursor, "id"), vec!["p2", "p3"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_logical() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("blogs")?;
            insert_test_documents(&coll);

            let cursor = coll.find(&doc! {
                "$and": [
                    { tags: { "$in": ["db"] } },
                    { "$or": [ { status: "draft" }, { likes_count: 1 } ] }
                ]
            });
            assert_eq!(field_texts(&cursor, "id"), vec!["p2", "p3"]);

            let cursor = coll.find(&doc! { "$or": [ { id: "p1" }, { id: "p3" } ], status: "published" });
            assert_eq!(field_texts(&cursor, "id"), vec!["p1"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_no_match_is_empty() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("blogs")?;
            assert!(coll.find(&doc! { status: "published" }).is_empty());
            assert!(coll.find_one(&doc! { id: "nope" }).is_none());

            insert_test_documents(&coll);
            assert!(coll.find(&doc! { status: "scheduled" }).is_empty());
            assert!(coll.find_one(&doc! { title: "Missing" }).is_none());
            assert_eq!(coll.count_documents(&doc! { status: "scheduled" }), 0);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_sort_is_stable() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("scores")?;
            coll.insert_one(doc! { id: 1, t: 5 });
            coll.insert_one(doc! { id: 2, t: 5 });
            coll.insert_one(doc! { id: 3, t: 1 });

            let cursor = coll.find(&doc! {}).sort("t", SortOrder::Descending);
            assert_eq!(field_texts(&cursor, "id"), vec!["1", "2", "3"]);

            let cursor = coll.find(&doc! {}).sort("t", SortOrder::Ascending);
            assert_eq!(field_texts(&cursor, "id"), vec!["3", "1", "2"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_sort_and_limit() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("blogs")?;
            insert_test_documents(&coll);

            let newest = coll
                .find(&doc! {})
                .sort("created_at", SortOrder::from(-1))
                .limit(2)
                .to_vec();
            assert_eq!(field_texts(&newest, "id"), vec!["p3", "p2"]);

            let likes = coll.find(&doc! {}).sort("likes_count", SortOrder::Ascending);
            let counts: Vec<i64> = likes
                .iter()
                .filter_map(|doc| doc.get("likes_count").and_then(|v| v.as_i64()))
                .collect();
            assert!(is_sorted(counts, true));

            assert!(coll.find(&doc! {}).limit(0).is_empty());
            Ok(())
        },
        cleanup,
    )
}
