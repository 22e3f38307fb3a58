//! Index internals: per-record filter masks and incrementally maintained sums.
//!
//! Every record carries a `u32` mask with bit `d` set when the record fails
//! dimension `d`'s filter. A record counts towards a group of dimension `e`
//! when every bit except `e`'s is clear, and towards the global aggregates
//! when the whole mask is clear.
//!
//! Changing one dimension's filter only visits the records filed under keys
//! whose inclusion flipped (via per-key posting lists), and each visited
//! record adjusts the affected sums by its value.
//!
//! Sums are held in fixed point (millionths) as `i128`, so removing a record
//! exactly undoes adding it and clearing a filter restores every sum bit for
//! bit, whatever the fractional part of the values.

use crate::error::FilterError;
use crate::event::Listener;
use crate::filter::Filter;
use crate::key::Key;
use std::collections::BTreeMap;

/// One bit of the record mask per dimension.
pub(crate) const MAX_DIMENSIONS: usize = 32;

/// Fixed-point units per 1.0 of a reduced value.
const FIXED_SCALE: f64 = 1_000_000.0;

/// Non-finite values count as zero.
pub(crate) fn to_fixed(value: f64) -> i128 {
    if value.is_finite() {
        (value * FIXED_SCALE).round() as i128
    } else {
        0
    }
}

pub(crate) fn from_fixed(sum: i128) -> f64 {
    sum as f64 / FIXED_SCALE
}

pub(crate) struct GroupState {
    /// Reduced value of each record, in fixed point
    values: Vec<i128>,
    /// Running fixed-point sum per key id
    pub(crate) sums: Vec<i128>,
    /// Contributing records per key id
    pub(crate) counts: Vec<usize>,
}

impl GroupState {
    fn adjust(&mut self, key_id: usize, value: i128, add: bool) {
        if add {
            self.sums[key_id] += value;
            self.counts[key_id] += 1;
        } else {
            self.sums[key_id] -= value;
            self.counts[key_id] -= 1;
        }
    }
}

pub(crate) struct DimensionState {
    pub(crate) name: String,
    /// Distinct keys in ascending order; a key id is a position here.
    pub(crate) keys: Vec<Key>,
    record_keys: Vec<usize>,
    postings: Vec<Vec<usize>>,
    pub(crate) filter: Filter,
    included: Vec<bool>,
    pub(crate) groups: Vec<GroupState>,
}

pub(crate) struct Aggregate {
    values: Vec<i128>,
    pub(crate) sum: i128,
}

pub(crate) struct Index<R> {
    pub(crate) records: Vec<R>,
    masks: Vec<u32>,
    pub(crate) dimensions: Vec<DimensionState>,
    pub(crate) aggregates: Vec<Aggregate>,
    /// Records passing every filter
    pub(crate) passing: usize,
    pub(crate) listeners: Vec<(String, Listener)>,
}

impl<R> Index<R> {
    pub(crate) fn new(records: Vec<R>) -> Self {
        let len = records.len();
        Self {
            records,
            masks: vec![0; len],
            dimensions: Vec::new(),
            aggregates: Vec::new(),
            passing: len,
            listeners: Vec::new(),
        }
    }

    pub(crate) fn add_dimension<F>(&mut self, name: &str, key_fn: F) -> Result<usize, FilterError>
    where
        F: Fn(&R) -> Key,
    {
        if self.dimensions.len() >= MAX_DIMENSIONS {
            return Err(FilterError::TooManyDimensions {
                max: MAX_DIMENSIONS,
            });
        }
        if self.dimensions.iter().any(|d| d.name == name) {
            return Err(FilterError::DuplicateDimension(name.to_string()));
        }

        let raw: Vec<Key> = self.records.iter().map(&key_fn).collect();
        let mut ids: BTreeMap<Key, usize> = raw.iter().cloned().map(|k| (k, 0)).collect();
        for (id, slot) in ids.values_mut().enumerate() {
            *slot = id;
        }

        let mut postings = vec![Vec::new(); ids.len()];
        let record_keys: Vec<usize> = raw
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let id = ids[key];
                postings[id].push(i);
                id
            })
            .collect();
        let keys: Vec<Key> = ids.into_keys().collect();

        log::debug!(
            "[BEX] index: dimension '{}' has {} keys over {} records",
            name,
            keys.len(),
            record_keys.len()
        );
        self.dimensions.push(DimensionState {
            name: name.to_string(),
            included: vec![true; keys.len()],
            keys,
            record_keys,
            postings,
            filter: Filter::All,
            groups: Vec::new(),
        });
        Ok(self.dimensions.len() - 1)
    }

    pub(crate) fn add_group<F>(&mut self, dim: usize, value_fn: F) -> usize
    where
        F: Fn(&R) -> f64,
    {
        let others = !(1u32 << dim);
        let values: Vec<i128> = self.records.iter().map(|r| to_fixed(value_fn(r))).collect();
        let masks = &self.masks;
        let state = &mut self.dimensions[dim];

        let mut sums = vec![0; state.keys.len()];
        let mut counts = vec![0; state.keys.len()];
        for (i, &key_id) in state.record_keys.iter().enumerate() {
            if masks[i] & others == 0 {
                sums[key_id] += values[i];
                counts[key_id] += 1;
            }
        }
        state.groups.push(GroupState {
            values,
            sums,
            counts,
        });
        state.groups.len() - 1
    }

    pub(crate) fn add_aggregate<F>(&mut self, value_fn: F) -> usize
    where
        F: Fn(&R) -> f64,
    {
        let values: Vec<i128> = self.records.iter().map(|r| to_fixed(value_fn(r))).collect();
        let sum = values
            .iter()
            .zip(&self.masks)
            .filter(|(_, mask)| **mask == 0)
            .map(|(v, _)| v)
            .sum();
        self.aggregates.push(Aggregate { values, sum });
        self.aggregates.len() - 1
    }

    /// Replace a dimension's filter. Returns false if the filter is unchanged.
    pub(crate) fn set_filter(&mut self, dim: usize, filter: Filter) -> bool {
        let bit = 1u32 << dim;
        let state = &mut self.dimensions[dim];
        if state.filter == filter {
            return false;
        }

        let mut flipped: Vec<(usize, bool)> = Vec::new();
        for (key_id, key) in state.keys.iter().enumerate() {
            let now = filter.accepts(key);
            if now != state.included[key_id] {
                state.included[key_id] = now;
                flipped.extend(state.postings[key_id].iter().map(|&i| (i, now)));
            }
        }
        state.filter = filter;
        log::debug!(
            "[BEX] index: filter on '{}' touched {} records",
            state.name,
            flipped.len()
        );

        for (record, now) in flipped {
            let old_mask = self.masks[record];
            let new_mask = if now { old_mask & !bit } else { old_mask | bit };
            self.masks[record] = new_mask;
            self.apply(record, old_mask, new_mask);
        }
        true
    }

    fn apply(&mut self, record: usize, old_mask: u32, new_mask: u32) {
        for (e, state) in self.dimensions.iter_mut().enumerate() {
            let others = !(1u32 << e);
            let was = (old_mask & others) == 0;
            let is = (new_mask & others) == 0;
            if was == is {
                continue;
            }
            let key_id = state.record_keys[record];
            for group in state.groups.iter_mut() {
                let value = group.values[record];
                group.adjust(key_id, value, is);
            }
        }

        let was = old_mask == 0;
        let is = new_mask == 0;
        if was == is {
            return;
        }
        if is {
            self.passing += 1;
        } else {
            self.passing -= 1;
        }
        for aggregate in self.aggregates.iter_mut() {
            let value = aggregate.values[record];
            if is {
                aggregate.sum += value;
            } else {
                aggregate.sum -= value;
            }
        }
    }

    /// Indexes of records passing every filter, walked in key order.
    pub(crate) fn ordered(&self, dim: usize, descending: bool, limit: usize) -> Vec<usize> {
        let state = &self.dimensions[dim];
        let key_ids: Box<dyn Iterator<Item = usize>> = if descending {
            Box::new((0..state.keys.len()).rev())
        } else {
            Box::new(0..state.keys.len())
        };
        key_ids
            .flat_map(|key_id| state.postings[key_id].iter().copied())
            .filter(|&i| self.masks[i] == 0)
            .take(limit)
            .collect()
    }

    pub(crate) fn passes(&self, record: usize) -> bool {
        self.masks[record] == 0
    }
}
