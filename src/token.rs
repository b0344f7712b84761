//! Token contract consumed by the matching engine
//!
//! The engine never tokenizes text. Callers hand it a slice of tokens produced elsewhere,
//! and the matchers only ever read two things from each token: its kind (the semantic
//! category, e.g. `identifier`) and its value (the literal text).

use serde::{Deserialize, Serialize};

/// Anything the matchers can inspect.
pub trait Token {
    /// The semantic category of the token.
    fn kind(&self) -> &str;

    /// The literal text of the token.
    fn value(&self) -> &str;
}

impl<T: Token + ?Sized> Token for &T {
    fn kind(&self) -> &str {
        (**self).kind()
    }

    fn value(&self) -> &str {
        (**self).value()
    }
}

/// A plain kind/value token for callers that don't bring their own type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleToken {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl SimpleToken {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

impl Token for SimpleToken {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for SimpleToken {
    fn from((kind, value): (K, V)) -> Self {
        Self::new(kind, value)
    }
}

/// Build a token vector from `(kind, value)` pairs.
pub fn tokens<K, V, I>(pairs: I) -> Vec<SimpleToken>
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().map(SimpleToken::from).collect()
}
