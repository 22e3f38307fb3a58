use serde::{Deserialize, Serialize};
use std::fmt;

/// A dimension key.
///
/// Composite keys (`Pair`) hash and compare as one atomic value, so
/// `("Utilities", "Stormwater")` and `("Utilities", "Water Treatment")` are
/// two distinct keys. Serializes as a string or a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Single(String),
    Pair(String, String),
}

impl Key {
    pub fn single(value: impl Into<String>) -> Self {
        Key::Single(value.into())
    }

    pub fn pair(first: impl Into<String>, second: impl Into<String>) -> Self {
        Key::Pair(first.into(), second.into())
    }

    /// The path segments of this key: one for `Single`, two for `Pair`.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Key::Single(v) => vec![v.as_str()],
            Key::Pair(a, b) => vec![a.as_str(), b.as_str()],
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Single(v) => write!(f, "{}", v),
            Key::Pair(a, b) => write!(f, "{},{}", a, b),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Single(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Single(value)
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for Key {
    fn from((a, b): (A, B)) -> Self {
        Key::Pair(a.into(), b.into())
    }
}
