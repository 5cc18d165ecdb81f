/// A feed entry. No identity field; duplicates are permitted and the
/// collection order is the only ordering there is.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Post {
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Produces a post on demand. `&mut self` because real generators advance
/// RNG state; tests inject a deterministic stub.
pub trait ContentGenerator {
    fn generate(&mut self) -> Post;
}
