use crate::index::from_fixed;
use crate::key::Key;
use crate::CrossFilter;
use serde::Serialize;
use std::cmp::Ordering;

/// One entry of a group: a key and its aggregated value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyValue {
    pub key: Key,
    pub value: f64,
}

/// Per-key sums over a dimension.
///
/// Reflects the filters of every other dimension but ignores its own, so a
/// chart keeps showing unselected bars while the rest of the dashboard
/// narrows down to the selection.
pub struct Group<R> {
    pub(crate) index: CrossFilter<R>,
    pub(crate) dim: usize,
    pub(crate) id: usize,
}

impl<R> Clone for Group<R> {
    fn clone(&self) -> Self {
        Self {
            index: self.index.clone(),
            dim: self.dim,
            id: self.id,
        }
    }
}

impl<R> Group<R> {
    /// Every key with its current sum, in ascending key order.
    pub fn all(&self) -> Vec<KeyValue> {
        let inner = self.index.inner.borrow();
        let state = &inner.dimensions[self.dim];
        let group = &state.groups[self.id];
        state
            .keys
            .iter()
            .zip(&group.sums)
            .map(|(key, &sum)| KeyValue {
                key: key.clone(),
                value: from_fixed(sum),
            })
            .collect()
    }

    /// The `k` largest entries by value. Ties keep ascending key order.
    pub fn top(&self, k: usize) -> Vec<KeyValue> {
        let mut all = self.all();
        all.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
        all.truncate(k);
        all
    }

    /// Current sum for one key, if the key exists.
    pub fn get(&self, key: &Key) -> Option<f64> {
        let inner = self.index.inner.borrow();
        let state = &inner.dimensions[self.dim];
        let position = state.keys.binary_search(key).ok()?;
        Some(from_fixed(state.groups[self.id].sums[position]))
    }

    /// Number of records currently counted under `key`.
    pub fn count(&self, key: &Key) -> usize {
        let inner = self.index.inner.borrow();
        let state = &inner.dimensions[self.dim];
        state
            .keys
            .binary_search(key)
            .map(|position| state.groups[self.id].counts[position])
            .unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn size(&self) -> usize {
        self.index.inner.borrow().dimensions[self.dim].keys.len()
    }

    pub fn dimension_name(&self) -> String {
        self.index.inner.borrow().dimensions[self.dim].name.clone()
    }
}

/// Sum over every record passing all active filters.
pub struct GroupAll<R> {
    pub(crate) index: CrossFilter<R>,
    pub(crate) id: usize,
}

impl<R> Clone for GroupAll<R> {
    fn clone(&self) -> Self {
        Self {
            index: self.index.clone(),
            id: self.id,
        }
    }
}

impl<R> GroupAll<R> {
    pub fn value(&self) -> f64 {
        from_fixed(self.index.inner.borrow().aggregates[self.id].sum)
    }

    /// Records passing every filter.
    pub fn count(&self) -> usize {
        self.index.inner.borrow().passing
    }
}
