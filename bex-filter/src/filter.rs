use crate::key::Key;
use std::collections::BTreeSet;

/// The active filter of one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// No filter: every record passes.
    #[default]
    All,
    /// Only records with exactly this key pass.
    Exact(Key),
    /// Records whose key is in the set pass (multi-select).
    In(BTreeSet<Key>),
    /// Records with `lo <= key < hi` pass.
    Range { lo: Key, hi: Key },
}

impl Filter {
    /// A multi-select filter; an empty selection means no filter.
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Key>,
    {
        let set: BTreeSet<Key> = keys.into_iter().collect();
        if set.is_empty() {
            Filter::All
        } else {
            Filter::In(set)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    pub fn accepts(&self, key: &Key) -> bool {
        match self {
            Filter::All => true,
            Filter::Exact(k) => k == key,
            Filter::In(set) => set.contains(key),
            Filter::Range { lo, hi } => lo <= key && key < hi,
        }
    }

    /// Chart-click semantics: add `key` to the selection, or remove it if it
    /// was already selected. Removing the last key clears the filter.
    pub fn toggled(self, key: Key) -> Self {
        match self {
            Filter::All | Filter::Range { .. } => Filter::In(BTreeSet::from([key])),
            Filter::Exact(existing) if existing == key => Filter::All,
            Filter::Exact(existing) => Filter::In(BTreeSet::from([existing, key])),
            Filter::In(mut set) => {
                if !set.remove(&key) {
                    set.insert(key);
                }
                Filter::from_keys(set)
            }
        }
    }

    /// Keys explicitly selected by an `Exact` or `In` filter.
    pub fn selected(&self) -> Vec<Key> {
        match self {
            Filter::Exact(k) => vec![k.clone()],
            Filter::In(set) => set.iter().cloned().collect(),
            Filter::All | Filter::Range { .. } => Vec::new(),
        }
    }
}
