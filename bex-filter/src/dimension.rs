use crate::filter::Filter;
use crate::group::Group;
use crate::key::Key;
use crate::{CrossFilter, FilterEvent};

/// A named axis over the records of a [`CrossFilter`].
///
/// Handles are cheap to clone; every clone addresses the same dimension and
/// filter state. Filter mutations are synchronous: once a `filter*` call
/// returns, every group, aggregate and listener has observed the change.
pub struct Dimension<R> {
    pub(crate) index: CrossFilter<R>,
    pub(crate) id: usize,
}

impl<R> Clone for Dimension<R> {
    fn clone(&self) -> Self {
        Self {
            index: self.index.clone(),
            id: self.id,
        }
    }
}

impl<R> Dimension<R> {
    pub fn name(&self) -> String {
        self.index.inner.borrow().dimensions[self.id].name.clone()
    }

    /// Distinct keys of this dimension in ascending order.
    pub fn keys(&self) -> Vec<Key> {
        self.index.inner.borrow().dimensions[self.id].keys.clone()
    }

    pub fn current_filter(&self) -> Filter {
        self.index.inner.borrow().dimensions[self.id].filter.clone()
    }

    pub fn has_filter(&self) -> bool {
        !self.index.inner.borrow().dimensions[self.id].filter.is_all()
    }

    /// Replace this dimension's filter and notify listeners if it changed.
    pub fn filter(&self, filter: Filter) {
        let changed = self
            .index
            .inner
            .borrow_mut()
            .set_filter(self.id, filter.clone());
        if changed {
            self.index.notify(&FilterEvent {
                dimension: self.name(),
                filter,
            });
        }
    }

    pub fn filter_exact(&self, key: impl Into<Key>) {
        self.filter(Filter::Exact(key.into()));
    }

    /// Select any of `keys`; an empty selection clears the filter.
    pub fn filter_in<I>(&self, keys: I)
    where
        I: IntoIterator<Item = Key>,
    {
        self.filter(Filter::from_keys(keys));
    }

    /// Select keys in the half-open range `[lo, hi)`.
    pub fn filter_range(&self, lo: impl Into<Key>, hi: impl Into<Key>) {
        self.filter(Filter::Range {
            lo: lo.into(),
            hi: hi.into(),
        });
    }

    /// Clear this dimension's filter.
    pub fn filter_all(&self) {
        self.filter(Filter::All);
    }

    /// Add `key` to the selection, or remove it if already selected.
    pub fn toggle(&self, key: impl Into<Key>) {
        let next = self.current_filter().toggled(key.into());
        self.filter(next);
    }

    /// Create a group summing `value_fn` per key of this dimension.
    pub fn group_sum<F>(&self, value_fn: F) -> Group<R>
    where
        F: Fn(&R) -> f64,
    {
        let id = self.index.inner.borrow_mut().add_group(self.id, value_fn);
        Group {
            index: self.index.clone(),
            dim: self.id,
            id,
        }
    }
}

impl<R: Clone> Dimension<R> {
    /// Up to `k` records passing every filter, by descending key.
    pub fn top(&self, k: usize) -> Vec<R> {
        self.records_in_order(true, k)
    }

    /// Up to `k` records passing every filter, by ascending key.
    pub fn bottom(&self, k: usize) -> Vec<R> {
        self.records_in_order(false, k)
    }

    fn records_in_order(&self, descending: bool, k: usize) -> Vec<R> {
        let inner = self.index.inner.borrow();
        inner
            .ordered(self.id, descending, k)
            .into_iter()
            .map(|i| inner.records[i].clone())
            .collect()
    }
}
