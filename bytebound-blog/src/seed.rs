use bytebound::collection::DocumentStore;
use bytebound::doc;

use crate::format::now;

/// Inserts two sample posts when `posts` is empty. Returns how many posts
/// were inserted.
pub fn seed_sample_posts(posts: &DocumentStore) -> usize {
    if posts.count_documents(&doc! {}) > 0 {
        return 0;
    }

    let timestamp = now();
    let samples = [
        doc! {
            id: (uuid::Uuid::new_v4().to_string()),
            title: "Getting Started with Document Stores",
            content: "A document store keeps schemaless records grouped in named collections...",
            excerpt: "Learn the basics of document stores and how to get started.",
            user_id: "sample_user",
            author: { name: "Sample Author" },
            created_at: (timestamp.as_str()),
            updated_at: (timestamp.as_str()),
            published: true,
            featured: true,
            tags: ["Database", "NoSQL", "Documents"],
            slug: "getting-started-with-document-stores",
            likes_count: 5,
            comments_count: 2,
            views_count: 100,
            reading_time: 5,
            featured_image: "/placeholder.svg",
            category: "Technology",
            status: "published",
        },
        doc! {
            id: (uuid::Uuid::new_v4().to_string()),
            title: "Web Development Best Practices",
            content: "Following best practices in web development is crucial for creating maintainable applications...",
            excerpt: "Essential tips for modern web development workflows.",
            user_id: "sample_user",
            author: { name: "Demo User" },
            created_at: (timestamp.as_str()),
            updated_at: (timestamp.as_str()),
            published: true,
            featured: true,
            tags: ["Web Development", "JavaScript", "Best Practices"],
            slug: "web-development-best-practices",
            likes_count: 10,
            comments_count: 3,
            views_count: 150,
            reading_time: 7,
            featured_image: "/placeholder.svg",
            category: "Technology",
            status: "published",
        },
    ];

    let inserted = samples.len();
    for sample in samples {
        posts.insert_one(sample);
    }
    log::info!("Seeded {} sample posts", inserted);
    inserted
}
