#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::panic::catch_unwind;
    use std::rc::Rc;

    use crate::{
        ContentGenerator, Post, PostStore, ScopeError, provide_posts, search_posts, signal,
        try_use_posts, use_posts,
    };

    struct CountingGen {
        calls: usize,
    }

    impl ContentGenerator for CountingGen {
        fn generate(&mut self) -> Post {
            self.calls += 1;
            Post::new(format!("title {}", self.calls), format!("body {}", self.calls))
        }
    }

    fn fixture() -> Vec<Post> {
        vec![
            Post::new("Neural Bus", "plugged"),
            Post::new("Wireless Driver", "override"),
        ]
    }

    #[test]
    fn initial_population_is_thirty() {
        let mut generator = CountingGen { calls: 0 };
        let store = PostStore::new(&mut generator);

        assert_eq!(generator.calls, 30);
        assert_eq!(store.len(), 30);
        assert_eq!(store.posts()[0], Post::new("title 1", "body 1"));
        // empty query: the derived view is the whole collection
        assert_eq!(store.searched_posts(), store.posts());
    }

    #[test]
    fn add_prepends() {
        let store = PostStore::from_posts(fixture());
        store.add_post(Post::new("Solid State Alarm", "reboot"));

        assert_eq!(store.len(), 3);
        assert_eq!(store.posts()[0], Post::new("Solid State Alarm", "reboot"));
        assert_eq!(store.posts()[1], fixture()[0]);
    }

    #[test]
    fn clear_empties_regardless_of_query() {
        let store = PostStore::from_posts(fixture());
        store.set_search_query("bus");
        store.clear_posts();

        assert!(store.is_empty());
        assert!(store.searched_posts().is_empty());

        // idempotent
        store.clear_posts();
        assert!(store.is_empty());
    }

    #[test]
    fn filter_matches_title_and_body() {
        let store = PostStore::from_posts(fixture());

        store.set_search_query("bus");
        assert_eq!(
            store.searched_posts(),
            vec![Post::new("Neural Bus", "plugged")]
        );

        store.set_search_query("override");
        assert_eq!(
            store.searched_posts(),
            vec![Post::new("Wireless Driver", "override")]
        );
    }

    #[test]
    fn filter_is_case_insensitive() {
        let store = PostStore::from_posts(fixture());
        store.set_search_query("BUS");
        assert_eq!(
            store.searched_posts(),
            vec![Post::new("Neural Bus", "plugged")]
        );
    }

    #[test]
    fn empty_query_is_identity() {
        let store = PostStore::from_posts(fixture());
        store.set_search_query("bus");
        store.set_search_query("");
        assert_eq!(store.searched_posts(), fixture());
    }

    #[test]
    fn query_is_stored_verbatim() {
        let store = PostStore::from_posts(Vec::new());
        store.set_search_query("  BuS ");
        assert_eq!(store.search_query(), "  BuS ");
    }

    #[test]
    fn search_preserves_collection_order() {
        let posts = vec![
            Post::new("bus one", "a"),
            Post::new("other", "b"),
            Post::new("bus two", "c"),
        ];
        let hits = search_posts(&posts, "bus");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "bus one");
        assert_eq!(hits[1].title, "bus two");
    }

    #[test]
    fn derived_view_tracks_mutations() {
        let store = PostStore::from_posts(fixture());
        store.set_search_query("bus");
        assert_eq!(store.searched_posts().len(), 1);

        store.add_post(Post::new("Haptic Bus", "transmit"));
        let view = store.searched_posts();
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].title, "Haptic Bus");

        // no mutation in between: repeated reads agree
        assert_eq!(store.searched_posts(), view);
    }

    #[test]
    fn accessor_outside_provider_fails() {
        assert_eq!(
            try_use_posts().unwrap_err(),
            ScopeError::OutsideProvider { what: "PostStore" }
        );

        let payload = catch_unwind(|| {
            let _ = use_posts();
        })
        .unwrap_err();
        let message = payload.downcast_ref::<String>().cloned().unwrap_or_default();
        assert!(message.contains("used outside of its provider"), "{message}");
    }

    #[test]
    fn accessor_inside_provider_never_fails() {
        provide_posts(PostStore::from_posts(fixture()), || {
            assert!(try_use_posts().is_ok());
            let feed = use_posts();
            assert_eq!(feed.posts.len(), 2);
            assert_eq!(feed.search_query, "");
        });

        // scope torn down: gated again
        assert!(try_use_posts().is_err());
    }

    #[test]
    fn value_callbacks_drive_the_providing_store() {
        provide_posts(PostStore::from_posts(fixture()), || {
            let feed = use_posts();
            (feed.set_search_query)("driver".into());

            let feed = use_posts();
            assert_eq!(feed.search_query, "driver");
            assert_eq!(feed.posts.len(), 1);

            (feed.on_add_post)(Post::new("Bluetooth Driver", "parse"));
            assert_eq!(use_posts().posts[0], Post::new("Bluetooth Driver", "parse"));

            (feed.on_clear_posts)();
            assert!(use_posts().posts.is_empty());
        });
    }

    #[test]
    fn nested_providers_shadow_innermost_first() {
        let outer = PostStore::from_posts(vec![Post::new("outer", "")]);
        provide_posts(outer, || {
            assert_eq!(use_posts().posts[0].title, "outer");

            let inner = PostStore::from_posts(vec![Post::new("inner", "")]);
            provide_posts(inner, || {
                assert_eq!(use_posts().posts[0].title, "inner");
            });

            assert_eq!(use_posts().posts[0].title, "outer");
        });
    }

    #[test]
    fn scope_pops_on_unwind() {
        let result = catch_unwind(|| {
            provide_posts(PostStore::from_posts(Vec::new()), || panic!("boom"));
        });
        assert!(result.is_err());
        assert!(try_use_posts().is_err());
    }

    #[test]
    fn signal_basics() {
        let sig = signal(41);
        assert_eq!(sig.get(), 41);
        assert_eq!(sig.revision(), 0);

        sig.set(100);
        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
        assert_eq!(sig.revision(), 2);
    }

    #[test]
    fn signal_subscription() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        sig.subscribe(move |v| sink.borrow_mut().push(*v));

        sig.set(7);
        sig.update(|v| *v += 1);
        assert_eq!(*seen.borrow(), vec![7, 8]);
    }
}
