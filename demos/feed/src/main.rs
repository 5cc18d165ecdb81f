use atomblog_faker::HackerFaker;
use atomblog_store::{Post, PostStore, provide_posts, use_posts};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut faker = HackerFaker::new();
    let store = PostStore::new(&mut faker);

    provide_posts(store, || {
        let feed = use_posts();
        println!("feed: {} posts", feed.posts.len());
        for post in feed.posts.iter().take(5) {
            println!("  {} — {}", post.title, post.body);
        }

        (feed.set_search_query)("bus".into());
        let feed = use_posts();
        println!("matching {:?}: {} posts", feed.search_query, feed.posts.len());
        for post in &feed.posts {
            println!("  {} — {}", post.title, post.body);
        }

        (feed.on_add_post)(Post::new("solid state bus", "Manually added entry."));
        let feed = use_posts();
        log::info!("first match is now {:?}", feed.posts.first().map(|p| &p.title));

        (feed.on_clear_posts)();
        println!("after clear: {} posts", use_posts().posts.len());
    });

    Ok(())
}
