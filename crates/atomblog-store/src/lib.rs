//! # Scoped, observable post store
//!
//! A small state-sharing layer for UI code: one [`PostStore`] owns a feed of
//! posts plus a search query, derives the filtered view on read, and is
//! shared with a whole subtree through a provider scope instead of being
//! threaded through every constructor.
//!
//! There are three pieces:
//!
//! - [`Signal<T>`] — observable, versioned value.
//! - the provider scope — a thread-local stack of established stores.
//! - [`PostStore`] — the domain store, reached via [`use_posts`].
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use atomblog_store::signal;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! assert_eq!(count.revision(), 2);
//! ```
//!
//! Every write bumps the revision; the store uses revision pairs to know
//! when the derived view went stale, so filtering only reruns after a
//! mutation.
//!
//! ## Providing and consuming the store
//!
//! [`provide_posts`] establishes the store for the duration of a closure;
//! [`use_posts`] hands any code inside that closure a [`PostsValue`] —
//! the filtered feed, the current query, and callbacks bound to the
//! providing store:
//!
//! ```rust
//! use atomblog_store::{Post, PostStore, provide_posts, use_posts};
//!
//! let store = PostStore::from_posts(vec![Post::new("neural bus", "plugged in")]);
//!
//! provide_posts(store, || {
//!     let feed = use_posts();
//!     assert_eq!(feed.posts.len(), 1);
//!
//!     (feed.set_search_query)("bus".into());
//!     assert_eq!(use_posts().posts.len(), 1);
//! });
//! ```
//!
//! Calling `use_posts` with no provider on the stack is a usage error and
//! fails fast; [`try_use_posts`] exposes the same check as a
//! [`Result`](std::result::Result) for callers that want
//! [`ScopeError`] as a value:
//!
//! ```rust
//! use atomblog_store::try_use_posts;
//!
//! assert!(try_use_posts().is_err());
//! ```
//!
//! Everything here is single-threaded by contract: handles are `Rc`-based,
//! mutators run to completion synchronously, and the provider stack is
//! thread-local.

pub mod error;
pub mod post;
pub mod scope;
pub mod search;
pub mod signal;
pub mod store;
pub mod tests;

pub use error::ScopeError;
pub use post::{ContentGenerator, Post};
pub use search::{post_matches, search_posts};
pub use signal::{Signal, SubId, signal};
pub use store::{
    INITIAL_POSTS, PostStore, PostsValue, provide_posts, try_use_posts, use_posts,
};
