use crate::Post;

/// `needle` must already be lowercased; the haystack is the title and body
/// joined with a single space, case-folded. Plain substring test, no
/// tokenization, no ranking.
pub fn post_matches(post: &Post, needle: &str) -> bool {
    let haystack = format!("{} {}", post.title, post.body).to_lowercase();
    haystack.contains(needle)
}

/// Stable subsequence of `posts` matching `query`; the full collection when
/// the query is empty.
pub fn search_posts(posts: &[Post], query: &str) -> Vec<Post> {
    if query.is_empty() {
        return posts.to_vec();
    }
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|p| post_matches(p, &needle))
        .cloned()
        .collect()
}

/// Memo of the derived view, keyed on the `(posts, query)` signal revisions.
/// Stale whenever either revision moved; no other caching invariant.
pub(crate) struct ViewCache {
    entry: Option<((u64, u64), Vec<Post>)>,
}

impl ViewCache {
    pub(crate) fn new() -> Self {
        Self { entry: None }
    }

    pub(crate) fn get_or_compute(
        &mut self,
        key: (u64, u64),
        compute: impl FnOnce() -> Vec<Post>,
    ) -> Vec<Post> {
        if let Some((cached_key, view)) = &self.entry
            && *cached_key == key
        {
            return view.clone();
        }
        let view = compute();
        self.entry = Some((key, view.clone()));
        view
    }
}
