use bytebound::common::SortOrder;
use bytebound::doc;
use bytebound::errors::StoreResult;
use bytebound_int_test::test_util::{cleanup, create_test_context};

fn main() -> StoreResult<()> {
    println!("Starting stress test...");
    let ctx = create_test_context()?;

    let count = 2_000;
    let posts = ctx.db().collection("blogs")?;

    let start = std::time::Instant::now();
    for i in 0..count {
        posts.insert_one(doc! {
            title: (uuid::Uuid::new_v4().to_string()),
            status: (if i % 10 == 0 { "archived" } else { "published" }),
            views_count: 0,
            order: i,
        });
    }
    println!("Inserted {} posts in {:?}", count, start.elapsed());

    let start = std::time::Instant::now();
    let visible = posts
        .find(&doc! { status: { "$ne": "archived" } })
        .sort("order", SortOrder::Descending)
        .limit(100);
    println!("Found {} visible posts in {:?}", visible.len(), start.elapsed());

    let start = std::time::Instant::now();
    for post in &visible {
        posts.update_one(
            &doc! { id: (post.get_or_null("id")) },
            &doc! { "$inc": { views_count: 1 } },
        );
    }
    println!("Counted {} views in {:?}", visible.len(), start.elapsed());

    let start = std::time::Instant::now();
    let archived = posts.count_documents(&doc! { status: "archived" });
    println!("Counted {} archived posts in {:?}", archived, start.elapsed());

    cleanup(ctx)
}
