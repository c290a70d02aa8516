use bytebound::common::Value;
use bytebound::doc;
use bytebound_int_test::test_util::{cleanup, create_test_context, run_test};

#[test]
fn test_insert_then_find_round_trip() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("blogs")?;
            let document = doc! {
                id: "p1",
                title: "Hello",
                author: { name: "Ada", avatar: "/ada.png" },
                tags: ["rust", "db"],
                rating: 4.5,
                draft: false,
                cover: (Value::Null),
            };

            let result = coll.insert_one(document.clone());
            assert_eq!(result.inserted_id, Value::from("p1"));
            assert!(result.acknowledged);

            let found = coll.find_one(&doc! { id: "p1" });
            assert_eq!(found, Some(document));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_generates_identity() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("users")?;
            let first = coll.insert_one(doc! { username: "ada" });
            let second = coll.insert_one(doc! { username: "grace" });

            assert!(first.inserted_id.is_string());
            assert_ne!(first.inserted_id, second.inserted_id);

            let stored = coll.find_one(&doc! { id: (first.inserted_id.clone()) }).unwrap();
            assert_eq!(stored.get_str("username"), Some("ada"));
            assert_eq!(coll.count_documents(&doc! {}), 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_keeps_order_and_duplicates() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.db().collection("tags")?;
            coll.insert_one(doc! { id: "t1", name: "rust" });
            coll.insert_one(doc! { id: "t1", name: "rust again" });
            coll.insert_one(doc! { id: "t2", name: "db" });

            let names: Vec<String> = coll
                .find(&doc! {})
                .into_iter()
                .map(|doc| doc.get_str("name").unwrap_or_default().to_string())
                .collect();
            assert_eq!(names, vec!["rust", "rust again", "db"]);
            assert_eq!(coll.find_one(&doc! { id: "t1" }).unwrap().get_str("name"), Some("rust"));
            Ok(())
        },
        cleanup,
    )
}
