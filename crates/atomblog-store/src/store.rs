//! The post store and its provider surface.

use std::cell::RefCell;
use std::rc::Rc;

use crate::scope;
use crate::search::{ViewCache, search_posts};
use crate::{ContentGenerator, Post, ScopeError, Signal, signal};

/// How many posts a fresh store is seeded with.
pub const INITIAL_POSTS: usize = 30;

/// Owns the post collection and the search query; serves the derived
/// (filtered) view from a revision-keyed memo.
///
/// All mutators are total: they run synchronously to completion and cannot
/// fail. The only failure in the system lives on the accessor side
/// ([`use_posts`] / [`try_use_posts`]).
pub struct PostStore {
    posts: Signal<Vec<Post>>,
    query: Signal<String>,
    cache: RefCell<ViewCache>,
}

impl PostStore {
    /// Seeds the collection with [`INITIAL_POSTS`] generated posts, in
    /// generation order. The query starts empty.
    pub fn new(generator: &mut dyn ContentGenerator) -> Self {
        let seed: Vec<Post> = (0..INITIAL_POSTS).map(|_| generator.generate()).collect();
        Self::from_posts(seed)
    }

    /// Deterministic construction from an explicit collection.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: signal(posts),
            query: signal(String::new()),
            cache: RefCell::new(ViewCache::new()),
        }
    }

    /// Prepends `post`; the new post becomes index 0. Contents are taken
    /// as-is, no validation.
    pub fn add_post(&self, post: Post) {
        log::debug!("add_post: {}", post.title);
        self.posts.update(|posts| posts.insert(0, post));
    }

    /// Replaces the collection with an empty one. Idempotent.
    pub fn clear_posts(&self) {
        log::debug!("clear_posts: dropping {} posts", self.len());
        self.posts.set(Vec::new());
    }

    /// Stores `query` verbatim; case-folding happens only at filter time.
    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        log::trace!("set_search_query: {query:?}");
        self.query.set(query);
    }

    pub fn search_query(&self) -> String {
        self.query.get()
    }

    /// Snapshot of the raw, unfiltered collection.
    pub fn posts(&self) -> Vec<Post> {
        self.posts.get()
    }

    pub fn len(&self) -> usize {
        self.posts.with(|p| p.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The derived view: posts whose title + body contain the query,
    /// case-insensitively, in collection order. Recomputed only when the
    /// posts or query revision moved since the last read.
    pub fn searched_posts(&self) -> Vec<Post> {
        let key = (self.posts.revision(), self.query.revision());
        self.cache.borrow_mut().get_or_compute(key, || {
            self.query
                .with(|q| self.posts.with(|posts| search_posts(posts, q)))
        })
    }
}

/// The value object handed to consumers: a snapshot of the derived view and
/// the query, plus mutator callbacks bound to the providing store.
///
/// Snapshots are taken at accessor time; mutate through the callbacks and
/// call [`use_posts`] again to observe the result.
pub struct PostsValue {
    pub posts: Vec<Post>,
    pub search_query: String,
    pub on_add_post: Rc<dyn Fn(Post)>,
    pub on_clear_posts: Rc<dyn Fn()>,
    pub set_search_query: Rc<dyn Fn(String)>,
}

impl std::fmt::Debug for PostsValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostsValue")
            .field("posts", &self.posts)
            .field("search_query", &self.search_query)
            .field("on_add_post", &"<callback>")
            .field("on_clear_posts", &"<callback>")
            .field("set_search_query", &"<callback>")
            .finish()
    }
}

/// Establishes `store` for the duration of `f`. The store lives exactly as
/// long as the scope: once `f` returns (or unwinds), the frame pops and the
/// last handle drops with it.
pub fn provide_posts<R>(store: PostStore, f: impl FnOnce() -> R) -> R {
    scope::provide(Rc::new(store), f)
}

/// `Result`-shaped accessor: the established store's value, or
/// [`ScopeError`] when no provider is on the stack.
pub fn try_use_posts() -> Result<PostsValue, ScopeError> {
    let store = scope::current::<PostStore>().ok_or(ScopeError::OutsideProvider {
        what: "PostStore",
    })?;
    Ok(PostsValue {
        posts: store.searched_posts(),
        search_query: store.search_query(),
        on_add_post: {
            let store = store.clone();
            Rc::new(move |post| store.add_post(post))
        },
        on_clear_posts: {
            let store = store.clone();
            Rc::new(move || store.clear_posts())
        },
        set_search_query: {
            let store = store.clone();
            Rc::new(move |query| store.set_search_query(query))
        },
    })
}

/// The gated accessor. Inside an established scope this never fails;
/// outside one it panics with the [`ScopeError`] message — misuse is meant
/// to surface immediately, not be handled.
pub fn use_posts() -> PostsValue {
    match try_use_posts() {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
