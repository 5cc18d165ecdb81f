use thiserror::Error;

/// The single failure in the system: reading a scoped value with no
/// provider established on the current thread.
///
/// This is a usage error, not a runtime condition —
/// [`use_posts`](crate::use_posts) surfaces it as an immediate panic, while
/// [`try_use_posts`](crate::try_use_posts) returns it as a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("{what} used outside of its provider")]
    OutsideProvider { what: &'static str },
}
