//! Reusable matcher closures
//!
//! Every combinator exists in two forms: a full application `expect_*(spec, tokens)` and
//! a partial one that binds the spec and returns a [`Matcher`]. The partial forms are what
//! get composed: a sequence's elements are matchers, which may themselves be sequences,
//! alternations, and so on.

use std::fmt;
use std::sync::Arc;

use crate::tree::Node;

type MatchFn<T> = dyn for<'t> Fn(&'t [T]) -> Option<Node<'t, T>> + Send + Sync;

/// A matcher over token slices. Cloning shares the bound spec.
pub struct Matcher<T> {
    inner: Arc<MatchFn<T>>,
}

impl<T> Matcher<T> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: for<'t> Fn(&'t [T]) -> Option<Node<'t, T>> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Run the matcher against the start of `tokens`.
    pub fn matches<'t>(&self, tokens: &'t [T]) -> Option<Node<'t, T>> {
        (self.inner)(tokens)
    }
}

impl<T> Clone for Matcher<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Matcher(..)")
    }
}

/// Bind `spec` to a two-argument matching function, yielding a matcher over tokens alone.
pub fn curry<S, T, F>(spec: S, f: F) -> Matcher<T>
where
    S: Send + Sync + 'static,
    T: 'static,
    F: for<'t> Fn(&S, &'t [T]) -> Option<Node<'t, T>> + Send + Sync + 'static,
{
    Matcher::from_fn(move |tokens| f(&spec, tokens))
}

/// The tokens left after `node` consumed its share of `tokens`.
pub fn rest_after<'a, T>(tokens: &'a [T], node: &Node<'_, T>) -> &'a [T] {
    tokens.get(node.len()..).unwrap_or(&[])
}
